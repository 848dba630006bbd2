/// Format an amount stored in cents as dollars, e.g. `4450` -> `"$44.50"`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_cents(1800), "$18.00");
    }

    #[test]
    fn formats_cents_with_padding() {
        assert_eq!(format_cents(4450), "$44.50");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }
}
