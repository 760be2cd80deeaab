//! Print-style message composition for the plain logging variants.
//!
//! Operands are joined with no separator, except that a single space goes
//! between two adjacent operands when neither of them is a string. So
//! `"started", " ok"` gives `started ok` and `1, 2` gives `1 2`, while
//! `"n=", 5` gives `n=5`.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

/// An operand of a plain logging call.
///
/// `is_string` decides the spacing rule; everything else is plain `Display`.
/// Implement it with the default for your own types to log them directly.
pub trait Printable: fmt::Display {
    /// Whether this operand counts as a string when deciding on a separating space.
    fn is_string(&self) -> bool {
        false
    }
}

impl Printable for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl Printable for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl Printable for Cow<'_, str> {
    fn is_string(&self) -> bool {
        true
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: Printable + ?Sized> Printable for Box<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: Printable + ?Sized> Printable for Rc<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: Printable + ?Sized> Printable for Arc<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

macro_rules! non_string_printable {
    ($($t:ty),* $(,)?) => {
        $(impl Printable for $t {})*
    };
}

non_string_printable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Printable for std::path::Display<'_> {}

impl Printable for fmt::Arguments<'_> {
    fn is_string(&self) -> bool {
        true
    }
}

/// Logs any `Display` value as a non-string operand without implementing [`Printable`] for it.
#[derive(Debug, Clone, Copy)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> fmt::Display for Shown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> Printable for Shown<T> {}

/// Joins operands by the print-style spacing rule.
#[must_use]
pub fn concat(operands: &[&dyn Printable]) -> String {
    let mut out = String::new();
    let mut prev_is_string = true;
    for (i, operand) in operands.iter().enumerate() {
        let is_string = operand.is_string();
        if i > 0 && !is_string && !prev_is_string {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{operand}");
        prev_is_string = is_string;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_joined_verbatim() {
        assert_eq!(concat(&[&"started", &" ok"]), "started ok");
        assert_eq!(concat(&[&"a", &String::from("b")]), "ab");
    }

    #[test]
    fn adjacent_non_strings_get_a_space() {
        assert_eq!(concat(&[&1, &2, &3]), "1 2 3");
        assert_eq!(concat(&[&true, &1.5]), "true 1.5");
    }

    #[test]
    fn string_next_to_value_gets_no_space() {
        assert_eq!(concat(&[&"n=", &5]), "n=5");
        assert_eq!(concat(&[&5, &"items"]), "5items");
        assert_eq!(concat(&[&1, &"-", &2]), "1-2");
    }

    #[test]
    fn shown_wraps_display_types() {
        let addr = std::net::Ipv4Addr::LOCALHOST;
        assert_eq!(concat(&[&Shown(addr), &Shown(8080)]), "127.0.0.1 8080");
    }

    #[test]
    fn empty_operands() {
        assert_eq!(concat(&[]), "");
    }
}
