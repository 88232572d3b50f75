//! Lead qualification: routes a dispatched application to scheduling or
//! to the manual-review acknowledgement

use crate::state::{EMPLOYEE_OPTIONS, REVENUE_OPTIONS};

/// Revenue bands that disqualify: the two lowest of the five
pub const DISQUALIFYING_REVENUE: [&str; 2] = [REVENUE_OPTIONS[0], REVENUE_OPTIONS[1]];

/// Employee bands that disqualify: the smallest of the five
pub const DISQUALIFYING_EMPLOYEES: [&str; 1] = [EMPLOYEE_OPTIONS[0]];

/// A lead is qualified when neither band is on its exclusion list. The
/// two checks are independent; there is no combined score.
pub fn is_qualified(revenue: &str, employees: &str) -> bool {
    let revenue_qualified = !DISQUALIFYING_REVENUE.contains(&revenue);
    let employees_qualified = !DISQUALIFYING_EMPLOYEES.contains(&employees);
    revenue_qualified && employees_qualified
}
