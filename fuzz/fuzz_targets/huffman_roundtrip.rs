#![no_main]
use huffcode::{BitString, BuildOptions, Error, FrequencyTable, HuffmanCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>, bool)| {
    let (input, noise, legacy) = data;

    if input.is_empty() {
        return;
    }

    let options = if legacy {
        BuildOptions::new().with_forced_pair(b'C', b'D')
    } else {
        BuildOptions::default()
    };
    let codec = HuffmanCodec::from_frequencies(&FrequencyTable::from_symbols(&input), &options)
        .expect("non-empty input");

    let bits = codec.encode(&input).expect("symbols come from the input");
    assert_eq!(codec.decode(&bits).expect("complete stream"), input);

    // Arbitrary bits must decode or fail cleanly, never panic.
    match codec.decode(&BitString::from(noise)) {
        Ok(_) | Err(Error::MalformedStream { .. }) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
