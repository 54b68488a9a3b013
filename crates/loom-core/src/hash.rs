//! SHA-256 digests of image files and generated bytes

use crate::Result;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

const PREFIX: &str = "sha256:";

/// Digest used to tell byte-identical copies apart from real variants
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Stream a file through the hasher without loading it whole
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self(hasher.finalize().into()))
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().fold(String::with_capacity(64), |mut out, b| {
            out.push_str(&format!("{:02x}", b));
            out
        })
    }

    /// `sha256:<hex>`, as recorded on generation results
    pub fn to_prefixed_hex(&self) -> String {
        format!("{}{}", PREFIX, self.to_hex())
    }

    /// First 12 hex digits, for log lines
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentHash").field(&self.short()).finish()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prefixed_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_bytes_match() {
        assert_eq!(ContentHash::from_bytes(b"icon"), ContentHash::from_bytes(b"icon"));
        assert_ne!(ContentHash::from_bytes(b"sword"), ContentHash::from_bytes(b"shield"));
    }

    #[test]
    fn test_file_hash_matches_bytes() {
        let dir = std::env::temp_dir().join(format!("loom_hash_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cell.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let hash = ContentHash::from_file(&path).unwrap();
        assert_eq!(hash, ContentHash::from_bytes(b"not really a png"));
        assert!(ContentHash::from_file(&dir.join("missing.png")).is_err());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prefixed_hex() {
        let prefixed = ContentHash::from_bytes(b"test data").to_prefixed_hex();
        assert!(prefixed.starts_with("sha256:"));
        assert_eq!(prefixed.len(), 7 + 64);
        assert_eq!(ContentHash::from_bytes(b"x").short().len(), 12);
    }
}
