#[cfg(feature = "openssl")]
pub mod openssl;
