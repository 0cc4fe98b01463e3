/// Integer printed with `'` between groups of three digits, e.g. `1'048'576`.
pub struct NiceInt(u128);

impl NiceInt {
    pub fn from(value: impl Into<u128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let head = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        f.write_str(&digits[..head])?;
        for group in digits.as_bytes()[head..].chunks(3) {
            f.write_str("'")?;
            // chunks of an ASCII string are ASCII
            f.write_str(std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}

/// Share of `part` in `total` in percent, `0` when `total` is zero.
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.
    } else {
        part as f64 * 100. / total as f64
    }
}
