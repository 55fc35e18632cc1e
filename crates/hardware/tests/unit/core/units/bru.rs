use riscemu_core::core::units::bru::BranchCond;
use rstest::rstest;

#[rstest]
#[case(BranchCond::Eq, 4, 4, true)]
#[case(BranchCond::Eq, 4, 5, false)]
#[case(BranchCond::Ne, 4, 5, true)]
#[case(BranchCond::Lt, -1, 0, true)]
#[case(BranchCond::Ge, -1, 0, false)]
#[case(BranchCond::Ge, 7, 7, true)]
#[case(BranchCond::Ltu, -1, 0, false)]
#[case(BranchCond::Ltu, 0, -1, true)]
#[case(BranchCond::Geu, -1, 0, true)]
#[case(BranchCond::Geu, i32::MAX, i32::MIN, false)]
fn branch_conditions(#[case] cond: BranchCond, #[case] a: i32, #[case] b: i32, #[case] taken: bool) {
    assert_eq!(cond.taken(a, b), taken);
}
