use solutions::arrays::has_duplicate::has_duplicate;

#[test]
fn test_case_0() {
    let nums: Vec<i32> = vec![1, 2, 3, 1];
    assert_eq!(has_duplicate(nums), true);
}

#[test]
fn test_case_1() {
    let nums: Vec<i32> = vec![1, 2, 3];
    assert_eq!(has_duplicate(nums), false);
}
