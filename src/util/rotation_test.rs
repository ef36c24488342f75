use super::*;

// =============================================================
// Full spin
// =============================================================

#[test]
fn first_spin_lands_at_minus_45() {
    let mut spin = RotationSpin::default();
    assert_eq!(
        spin.spin(),
        "rotateX(-45deg) rotateY(-45deg) rotateZ(-180deg)"
    );
}

#[test]
fn spins_step_by_a_quarter_turn() {
    let mut spin = RotationSpin::default();
    spin.spin();
    assert_eq!(
        spin.spin(),
        "rotateX(-135deg) rotateY(-135deg) rotateZ(-180deg)"
    );
    assert_eq!(
        spin.spin(),
        "rotateX(-225deg) rotateY(-225deg) rotateZ(-180deg)"
    );
}

// =============================================================
// Chat spin
// =============================================================

#[test]
fn chat_spin_steps_by_ten_with_flat_z() {
    let mut spin = RotationSpin::default();
    assert_eq!(
        spin.chat_spin(),
        "rotateX(35deg) rotateY(35deg) rotateZ(-90deg)"
    );
    assert_eq!(
        spin.chat_spin(),
        "rotateX(25deg) rotateY(25deg) rotateZ(-90deg)"
    );
}

#[test]
fn spin_kinds_share_one_counter() {
    let mut spin = RotationSpin::default();
    spin.spin(); // -45
    assert_eq!(
        spin.chat_spin(),
        "rotateX(-55deg) rotateY(-55deg) rotateZ(-90deg)"
    );
}
