//! Safe-ish conversions between rust and sql types.
//! SQLite hands back signed integers; the public records use unsigned ids.

use anyhow::{Result, anyhow};

pub fn i64_to_u32(i: i64) -> Result<u32> {
    if i < 0 || i > i64::from(u32::MAX) {
        Err(anyhow!("i64 value {i} is out of range for u32"))
    } else {
        Ok(i as u32)
    }
}

pub fn u32_to_i64(i: u32) -> Result<i64> {
    Ok(i64::from(i))
}

pub fn i32_to_u32(i: i32) -> Result<u32> {
    if i < 0 {
        Err(anyhow!(
            "i32 value {i} is negative and cannot be converted to u32"
        ))
    } else {
        Ok(i as u32)
    }
}

pub fn u32_to_i32(i: u32) -> Result<i32> {
    if i > i32::MAX as u32 {
        Err(anyhow!(
            "u32 value {i} exceeds i32::MAX and cannot be converted to i32"
        ))
    } else {
        Ok(i as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_to_u32() {
        assert_eq!(i64_to_u32(0).unwrap(), 0);
        assert_eq!(i64_to_u32(42).unwrap(), 42);
        assert!(i64_to_u32(-1).is_err());
        assert!(i64_to_u32(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_i32_to_u32() {
        assert_eq!(i32_to_u32(7).unwrap(), 7);
        assert!(i32_to_u32(-7).is_err());
    }

    #[test]
    fn test_u32_to_i32() {
        assert_eq!(u32_to_i32(3).unwrap(), 3);
        assert!(u32_to_i32(u32::MAX).is_err());
    }
}
