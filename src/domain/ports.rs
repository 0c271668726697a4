use crate::utils::error::Result;

/// Where export files land. Paths are relative to the storage's own root.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
