use huffcode::{
    build_code_table, build_tree, build_tree_with, decode, encode, BuildOptions, Error,
    FrequencyTable, HuffmanCodec, Node,
};
use proptest::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Minimal total code length, computed from weights alone.
fn optimal_cost(frequencies: &FrequencyTable<u8>) -> u64 {
    if frequencies.len() == 1 {
        return frequencies.total();
    }
    let mut heap: BinaryHeap<Reverse<u64>> =
        frequencies.iter().map(|(_, &c)| Reverse(c)).collect();
    let mut cost = 0;
    while heap.len() > 1 {
        let Reverse(a) = heap.pop().unwrap();
        let Reverse(b) = heap.pop().unwrap();
        cost += a + b;
        heap.push(Reverse(a + b));
    }
    cost
}

fn check_weights(node: &Node<u8>, frequencies: &FrequencyTable<u8>) {
    match node {
        Node::Leaf { weight, symbol } => assert_eq!(Some(*weight), frequencies.get(symbol)),
        Node::Internal {
            weight,
            left,
            right,
        } => {
            assert_eq!(*weight, left.weight() + right.weight());
            check_weights(left, frequencies);
            check_weights(right, frequencies);
        }
    }
}

/// True if some internal node has exactly `left` and `right` as leaf children.
fn has_leaf_pair(node: &Node<char>, left: char, right: char) -> bool {
    match node.children() {
        None => false,
        Some((l, r)) => {
            (l.symbol() == Some(&left) && r.symbol() == Some(&right))
                || has_leaf_pair(l, left, right)
                || has_leaf_pair(r, left, right)
        }
    }
}

proptest! {
    #[test]
    fn test_huffman_roundtrip(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let root = build_tree(&input).unwrap();
        let table = build_code_table(&root);
        let bits = encode(&input, &table).unwrap();
        prop_assert_eq!(decode(&bits, &root).unwrap(), input);
    }

    #[test]
    fn test_small_alphabet_roundtrip(input in prop::collection::vec(0..3u8, 1..100)) {
        let codec = HuffmanCodec::new(&input, &BuildOptions::default()).unwrap();
        let bits = codec.encode(&input).unwrap();
        prop_assert_eq!(codec.decode(&bits).unwrap(), input);
    }

    #[test]
    fn test_text_roundtrip(text in "\\PC{1,80}") {
        let codec = HuffmanCodec::from_text(&text, &BuildOptions::default()).unwrap();
        let bits = codec.encode_text(&text).unwrap();
        prop_assert_eq!(codec.decode_text(&bits).unwrap(), text);
    }

    #[test]
    fn test_legacy_roundtrip(text in "[A-F]{1,60}") {
        let codec = HuffmanCodec::from_text(&text, &BuildOptions::legacy()).unwrap();
        if text.contains('C') && text.contains('D') {
            prop_assert!(has_leaf_pair(codec.tree(), 'C', 'D'));
            let table = codec.table();
            prop_assert_eq!(table.get(&'C').unwrap().len(), table.get(&'D').unwrap().len());
        }
        let bits = codec.encode_text(&text).unwrap();
        prop_assert_eq!(codec.decode_text(&bits).unwrap(), text);
    }

    #[test]
    fn test_codes_prefix_free(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let table = build_code_table(&build_tree(&input).unwrap());
        for (a, ca) in &table {
            prop_assert!(!ca.is_empty());
            for (b, cb) in &table {
                if a != b {
                    prop_assert!(!ca.is_prefix_of(cb));
                }
            }
        }
    }

    #[test]
    fn test_weight_invariant(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let frequencies = FrequencyTable::from_symbols(&input);
        let root = build_tree(&input).unwrap();
        prop_assert_eq!(root.weight(), input.len() as u64);
        prop_assert_eq!(root.leaf_count(), frequencies.len());
        prop_assert_eq!(root.internal_count(), frequencies.len() - 1);
        check_weights(&root, &frequencies);
    }

    #[test]
    fn test_encoded_length_is_optimal(input in prop::collection::vec(0..16u8, 1..300)) {
        let frequencies = FrequencyTable::from_symbols(&input);
        let table = build_code_table(&build_tree(&input).unwrap());
        let bits = encode(&input, &table).unwrap();
        prop_assert_eq!(bits.len() as u64, optimal_cost(&frequencies));
        prop_assert_eq!(table.encoded_len(&frequencies), bits.len() as u64);
    }

    #[test]
    fn test_build_is_deterministic(input in prop::collection::vec(0..8u8, 1..200)) {
        let mut reversed = input.clone();
        reversed.reverse();
        // Same frequencies in a different order give the same tree.
        prop_assert_eq!(build_tree(&input).unwrap(), build_tree(&reversed).unwrap());
    }

    #[test]
    fn test_truncated_stream_is_detected(input in prop::collection::vec(0..4u8, 2..100)) {
        let root = build_tree(&input).unwrap();
        prop_assume!(!root.is_leaf());
        let table = build_code_table(&root);
        let mut bits = encode(&input, &table).unwrap();
        let last = table.get(input.last().unwrap()).unwrap().len();
        prop_assume!(last > 1);
        bits.truncate(bits.len() - 1);
        let is_malformed = matches!(
            decode(&bits, &root),
            Err(Error::MalformedStream { pending_bits, .. }) if pending_bits == last - 1
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn test_sharded_counts_merge(input in prop::collection::vec(any::<u8>(), 0..200), split in 0..200usize) {
        let split = split.min(input.len());
        let mut merged = FrequencyTable::from_symbols(&input[..split]);
        merged.merge(&FrequencyTable::from_symbols(&input[split..])).unwrap();
        prop_assert_eq!(merged, FrequencyTable::from_symbols(&input));
    }
}

#[test]
fn test_tie_break_is_stable() {
    let frequencies = FrequencyTable::from_counts([('b', 2), ('a', 2)]).unwrap();
    let first = build_tree_with(&frequencies, &BuildOptions::default()).unwrap();
    for _ in 0..100 {
        let again = build_tree_with(&frequencies, &BuildOptions::default()).unwrap();
        assert_eq!(first, again);
    }
    let (left, right) = first.children().unwrap();
    assert_eq!(left.symbol(), Some(&'a'));
    assert_eq!(right.symbol(), Some(&'b'));
}

#[test]
fn test_single_symbol_pipeline() {
    let text: Vec<char> = "aaaa".chars().collect();
    let root = build_tree(&text).unwrap();
    assert_eq!(root, Node::leaf('a', 4));
    let table = build_code_table(&root);
    assert_eq!(table.get(&'a').unwrap().to_string(), "0");
    let bits = encode(&text, &table).unwrap();
    assert_eq!(bits.to_string(), "0000");
    assert_eq!(decode(&bits, &root).unwrap(), text);
}

#[test]
fn test_abracadabra_is_minimal() {
    let text: Vec<u8> = b"abracadabra".to_vec();
    let frequencies = FrequencyTable::from_symbols(&text);
    assert_eq!(frequencies.get(&b'a'), Some(5));
    assert_eq!(frequencies.get(&b'b'), Some(2));
    assert_eq!(frequencies.get(&b'r'), Some(2));
    assert_eq!(frequencies.get(&b'c'), Some(1));
    assert_eq!(frequencies.get(&b'd'), Some(1));

    let table = build_code_table(&build_tree(&text).unwrap());
    let bits = encode(&text, &table).unwrap();
    assert_eq!(bits.len(), 23);
    assert_eq!(optimal_cost(&frequencies), 23);
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(build_tree::<u8>(&[]), Err(Error::EmptyInput));
    assert!(matches!(
        HuffmanCodec::from_text("", &BuildOptions::default()),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn test_overflowing_counts_are_rejected() {
    assert!(matches!(
        FrequencyTable::from_counts([('a', u64::MAX), ('b', 1)]),
        Err(Error::WeightOverflow { .. })
    ));
}
