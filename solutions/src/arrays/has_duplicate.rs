use std::collections::HashSet;

/// Return `true` when any value appears at least twice in `nums`.
pub fn has_duplicate(nums: Vec<i32>) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    for n in nums {
        if !seen.insert(n) {
            return true;
        }
    }
    false
}
