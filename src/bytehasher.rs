use core::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{AlgorithmName, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U32, U4},
    HashMarker, Output, OutputSizeUser, Reset,
};
use tracing::trace;

use crate::padding;
use crate::state::{State, DIGEST_SIZE};

/// ByteHasher with the standard [`digest`] API (`Digest`, `Update`, `FixedOutput`, ...).
pub type ByteHasher = CoreWrapper<ByteHasherCore>;

/// hash computes the ByteHasher digest of `message`.
///
/// Every call works on its own [`State`], so the result depends only on `message`.
pub fn hash(message: impl AsRef<[u8]>) -> [u8; DIGEST_SIZE] {
    let message = message.as_ref();
    let padded = padding::pad(message);
    trace!(len = message.len(), padded_len = padded.len(), "absorbing message");

    let mut state = State::new();
    state.absorb(&padded);
    trace!("absorbed, finalizing state");
    state.finalize();

    state.fold()
}

/// hash_str hashes the UTF-8 encoding of `message`.
pub fn hash_str(message: &str) -> [u8; DIGEST_SIZE] {
    hash(message.as_bytes())
}

/// to_spaced_hex formats bytes as lowercase two-digit hex groups separated by single spaces,
/// e.g. `1a 2b 3c`.
pub fn to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// ByteHasherCore is the block-level core behind [`ByteHasher`].
///
/// Input is buffered in 4-byte blocks, the padding block size, and every full block goes
/// straight into the working state, so memory use does not grow with the message. At
/// finalization the 0 to 3 pending bytes are padded into one last block, which gives the same
/// padded message as [`padding::pad`] on the whole input.
#[derive(Clone, Debug, Default)]
pub struct ByteHasherCore {
    state: State,
}

impl ByteHasherCore {
    /// new returns a core with an empty working state.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashMarker for ByteHasherCore {}

impl BlockSizeUser for ByteHasherCore {
    type BlockSize = U4;
}

impl BufferKindUser for ByteHasherCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for ByteHasherCore {
    type OutputSize = U32;
}

impl UpdateCore for ByteHasherCore {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for b in blocks {
            self.state.update(b)
        }
    }
}

impl FixedOutputCore for ByteHasherCore {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let tail = padding::pad_block(buffer.get_data());
        self.state.update(&tail);
        trace!(padded_len = self.state.absorbed_len(), "absorbed message");

        self.state.diffuse();
        self.state.finalize();

        out.copy_from_slice(&self.state.fold());
    }
}

impl Reset for ByteHasherCore {
    fn reset(&mut self) {
        self.state.reset();
    }
}

impl AlgorithmName for ByteHasherCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteHasher")
    }
}

#[cfg(test)]
pub mod test {
    use std::io::Write;
    use std::thread;

    use super::*;
    use digest::{Digest, FixedOutput, Update};
    use rand::{Rng, SeedableRng};
    use sha3::{
        digest::{ExtendableOutput, XofReader},
        Shake256,
    };

    struct TestElement {
        input: &'static str,
        output: &'static str,
    }

    static TEST_VECTOR: &[TestElement] = &[
        TestElement {
            input: "",
            output: "ca9575c1d3a02c2eb204e7e24ac9d2368130c90b4177baaf3aec758ee5ca6b5f",
        },
        TestElement {
            input: "a",
            output: "a2e8c2316874759af913e2d8dce883d6017708bb2ee68cdbc054827d1c5c29f2",
        },
        TestElement {
            input: "ab",
            output: "9a7e4f53369ff4f928d86a7ea65cc7c7d9c916447ae355247da28de8dacc6e26",
        },
        TestElement {
            input: "abc",
            output: "0988d5a3d64c8ff768caac172e77217e4aa51bd275cb7fa2b70aed560b05a5a6",
        },
        TestElement {
            input: "abcd",
            output: "d012ae594eab879e3bf829ecdbfd98399465f4dce25f726865d6c37952bd1cf3",
        },
        TestElement {
            input: "test",
            output: "9a4954a3efa4082b0af554119494a4d5c55483494c579fc79c5dc7e1d78094a9",
        },
        TestElement {
            input: "hello world",
            output: "35d74c4bbdab3a80ec325f50d845b00479b2f656708c9572bf6a70e654c4eb7e",
        },
        TestElement {
            input: "You must be the change you wish to see in the world. -Mahatma Gandhi",
            output: "55f3692abc070478bd08c24e766b78f0cb2ba978bca26910d571e06d664f5481",
        },
        TestElement {
            input: "I think, therefore I am. – Rene Descartes.",
            output: "eeda587e816b65f1d4731b55c26fa2164ce0ca06358d40a41ff63c7075b062c1",
        },
    ];

    fn shake_input(len: usize) -> Vec<u8> {
        let mut input = vec![0; len];
        let mut v = Shake256::default();
        v.write_all("bytehasher input".as_bytes()).unwrap();
        v.finalize_xof().read(&mut input);
        input
    }

    fn hamming(a: &[u8], b: &[u8]) -> u32 {
        a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
    }

    #[test]
    fn test_vector() {
        TEST_VECTOR.iter().enumerate().for_each(|(i, element)| {
            let sum = hex::encode(hash_str(element.input));
            assert_eq!(
                element.output, sum,
                "test vector element mismatched on index {} failed! got {}, want {}",
                i, sum, element.output
            );
        })
    }

    #[test]
    fn test_vector_digest_api() {
        TEST_VECTOR.iter().enumerate().for_each(|(i, element)| {
            let mut h = ByteHasher::default();
            Update::update(&mut h, element.input.as_bytes());

            let sum = hex::encode(h.finalize_fixed());
            assert_eq!(
                element.output, sum,
                "test vector element mismatched on index {} failed! got {}, want {}",
                i, sum, element.output
            );
        })
    }

    #[test]
    fn hello_world_spaced() {
        assert_eq!(
            to_spaced_hex(&hash("hello world")),
            "35 d7 4c 4b bd ab 3a 80 ec 32 5f 50 d8 45 b0 04 79 b2 f6 56 70 8c 95 72 bf 6a 70 e6 54 c4 eb 7e"
        );
    }

    #[test]
    fn long_inputs() {
        let sum = hex::encode(hash(vec![b'a'; 300]));
        let expected_sum = "8e261cf405b58677c0453fd009aa35fc310c285aa195854141beefe6715905db";
        assert_eq!(sum, expected_sum, "got {}, want {}", sum, expected_sum);

        let sum = hex::encode(hash(shake_input(6000)));
        let expected_sum = "41525990fc5ac454b0bf2c95c8a17fb99ff06ae7c3d6a9b37bd873f376eae27a";
        assert_eq!(sum, expected_sum, "got {}, want {}", sum, expected_sum);
    }

    #[test]
    fn chunked_updates_match_one_shot() {
        let input = shake_input(1031);
        let want = hash(&input);

        for chunk in [1, 2, 3, 4, 7, 64, 129, 1031] {
            let mut h = ByteHasher::new();
            input.chunks(chunk).for_each(|c| Digest::update(&mut h, c));
            let got = h.finalize();
            assert_eq!(got.as_slice(), &want[..], "chunk size {}", chunk);
        }
    }

    #[test]
    fn reset_forgets_input() {
        let input = shake_input(6000);

        let mut h = ByteHasher::new();
        Digest::update(&mut h, b"some unrelated prefix");
        Digest::reset(&mut h);
        Digest::update(&mut h, &input);

        assert_eq!(h.finalize().as_slice(), &hash(&input)[..]);
    }

    #[test]
    fn deterministic() {
        let input = shake_input(777);
        assert_eq!(hash(&input), hash(&input));
        assert_eq!(hash(&input), hash(input.clone()));
    }

    #[test]
    fn no_state_leaks_between_calls() {
        let fresh = hash("abc");
        hash(shake_input(6001));
        hash("");
        assert_eq!(hash("abc"), fresh);
    }

    #[test]
    fn concurrent_calls() {
        let want: Vec<_> = TEST_VECTOR.iter().map(|e| hash_str(e.input)).collect();

        let handles: Vec<_> = TEST_VECTOR
            .iter()
            .map(|e| thread::spawn(move || hash_str(e.input)))
            .collect();

        handles
            .into_iter()
            .zip(want)
            .for_each(|(h, want)| assert_eq!(h.join().unwrap(), want));
    }

    #[test]
    fn empty_input_is_padding_only() {
        assert_eq!(hash(b""), hash_str(""));
        // [4, 4, 4, 4] pads to two blocks, so it is not the padded empty message.
        assert_ne!(hash([4u8, 4, 4, 4]), hash(b""));
    }

    #[test]
    fn avalanche() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x6279_7465);
        let mut total = 0u64;
        let mut samples = 0u64;

        for len in [1, 3, 4, 11, 64, 200] {
            for _ in 0..8 {
                let msg: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let base = hash(&msg);

                for _ in 0..8 {
                    let mut flipped = msg.clone();
                    let bit = rng.gen_range(0..len * 8);
                    flipped[bit / 8] ^= 1 << (bit % 8);

                    let d = hamming(&base, &hash(&flipped));
                    assert!(
                        d > 32,
                        "flipping bit {} of a {}-byte message changed {} bits",
                        bit,
                        len,
                        d
                    );
                    total += d as u64;
                    samples += 1;
                }
            }
        }

        let mean = total / samples;
        assert!((96..=160).contains(&mean), "mean hamming distance {}", mean);
    }

    #[test]
    fn algorithm_name() {
        let h = ByteHasher::default();
        assert!(format!("{:?}", h).starts_with("ByteHasher"));
    }
}
