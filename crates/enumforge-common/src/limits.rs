//! Centralized limits and thresholds.
//!
//! Values here shape construction-time decisions; none of them limit what a
//! caller may declare.

/// Largest member count for which an enumeration with gaps in its value set
/// is tested with a chain of equality comparisons.
///
/// At or above this count the membership test switches to a hash set. Tables
/// whose values form one contiguous range always use a two-comparison range
/// check regardless of size.
pub const MAX_DISJUNCTION_MEMBERS: usize = 20;

/// First value handed out by the auto-increment cursor is `AUTO_VALUE_START + 1`.
pub const AUTO_VALUE_START: i64 = -1;

/// Maximum nesting of parentheses and unary operators in a constant expression.
///
/// The expression parser recurses once per level; deeper input is rejected
/// with an error instead of exhausting the stack.
pub const MAX_EXPR_DEPTH: u32 = 256;
