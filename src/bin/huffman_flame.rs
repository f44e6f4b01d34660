use huffcode::{build_code_table, build_tree, decode, encode};

fn main() {
    let input = (0..10000u32)
        .map(|i| b"etaoinshrdlu"[((i * 7) % 23 % 12) as usize])
        .collect::<Vec<_>>();

    for _ in 0..1000 {
        let root = build_tree(&input).unwrap();
        let table = build_code_table(&root);
        let bits = encode(&input, &table).unwrap();
        let output = decode(&bits, &root).unwrap();
        assert_eq!(output.len(), input.len());
    }
}
