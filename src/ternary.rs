/// Conditional expression on one line.  `cargo fmt` spreads `if`
/// expressions across five lines, which makes the border tables of
/// the seam graph (first lane, last lane, everything between) much
/// harder to read side by side.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
