//! Message digests for the hash tool pane.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

use sha2::Digest;

/// Digest algorithms listed by the hash tool, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha2_224,
    Sha2_256,
    Sha2_384,
    Sha2_512,
    Sha2_512_224,
    Sha2_512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashAlgorithm {
    pub const ALL: [Self; 12] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha2_224,
        Self::Sha2_256,
        Self::Sha2_384,
        Self::Sha2_512,
        Self::Sha2_512_224,
        Self::Sha2_512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha2_224 => "SHA2-224",
            Self::Sha2_256 => "SHA2-256",
            Self::Sha2_384 => "SHA2-384",
            Self::Sha2_512 => "SHA2-512",
            Self::Sha2_512_224 => "SHA2-512/224",
            Self::Sha2_512_256 => "SHA2-512/256",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn output_size(self) -> usize {
        match self {
            Self::Md5 => <md5::Md5 as Digest>::output_size(),
            Self::Sha1 => <sha1::Sha1 as Digest>::output_size(),
            Self::Sha2_224 => <sha2::Sha224 as Digest>::output_size(),
            Self::Sha2_256 => <sha2::Sha256 as Digest>::output_size(),
            Self::Sha2_384 => <sha2::Sha384 as Digest>::output_size(),
            Self::Sha2_512 => <sha2::Sha512 as Digest>::output_size(),
            Self::Sha2_512_224 => <sha2::Sha512_224 as Digest>::output_size(),
            Self::Sha2_512_256 => <sha2::Sha512_256 as Digest>::output_size(),
            Self::Sha3_224 => <sha3::Sha3_224 as Digest>::output_size(),
            Self::Sha3_256 => <sha3::Sha3_256 as Digest>::output_size(),
            Self::Sha3_384 => <sha3::Sha3_384 as Digest>::output_size(),
            Self::Sha3_512 => <sha3::Sha3_512 as Digest>::output_size(),
        }
    }

    /// Digest of `data`.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => md5::Md5::digest(data).to_vec(),
            Self::Sha1 => sha1::Sha1::digest(data).to_vec(),
            Self::Sha2_224 => sha2::Sha224::digest(data).to_vec(),
            Self::Sha2_256 => sha2::Sha256::digest(data).to_vec(),
            Self::Sha2_384 => sha2::Sha384::digest(data).to_vec(),
            Self::Sha2_512 => sha2::Sha512::digest(data).to_vec(),
            Self::Sha2_512_224 => sha2::Sha512_224::digest(data).to_vec(),
            Self::Sha2_512_256 => sha2::Sha512_256::digest(data).to_vec(),
            Self::Sha3_224 => sha3::Sha3_224::digest(data).to_vec(),
            Self::Sha3_256 => sha3::Sha3_256::digest(data).to_vec(),
            Self::Sha3_384 => sha3::Sha3_384::digest(data).to_vec(),
            Self::Sha3_512 => sha3::Sha3_512::digest(data).to_vec(),
        }
    }
}

/// One line of the hash table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRow {
    pub algorithm: HashAlgorithm,
    pub size_bytes: usize,
    /// Lowercase hex digest; empty when the input could not be read.
    pub hex: String,
}

/// A row per algorithm for `data`. `None` (unreadable input) keeps the sizes
/// and leaves every digest blank.
#[must_use]
pub fn hash_table(data: Option<&[u8]>) -> Vec<HashRow> {
    HashAlgorithm::ALL
        .iter()
        .map(|&algorithm| HashRow {
            algorithm,
            size_bytes: algorithm.output_size(),
            hex: data.map(|bytes| hex::encode(algorithm.digest(bytes))).unwrap_or_default(),
        })
        .collect()
}
