use super::*;

const DT: f64 = 1.0 / 60.0;

fn inputs(hovered: bool, active: bool, any_active: bool) -> CardInputs {
    CardInputs {
        hovered,
        active,
        any_active,
        deal_delay_s: 0.0,
    }
}

fn run_monotone(channel: Channel, from: CardAnimState, inp: CardInputs) -> f64 {
    let tuning = AnimationTuning::default();
    let target = inp.target(channel);
    let rising = target >= from.get(channel);
    let mut s = from;
    let steps = (10.0 / DT) as usize;
    for _ in 0..steps {
        let next = s.advance(&inp, DT, &tuning);
        let (a, b) = (s.get(channel), next.get(channel));
        if rising {
            assert!(b >= a, "{channel:?} decreased: {a} -> {b}");
            assert!(b <= target + 1e-12, "{channel:?} overshot: {b}");
        } else {
            assert!(b <= a, "{channel:?} increased: {a} -> {b}");
            assert!(b >= target - 1e-12, "{channel:?} overshot: {b}");
        }
        s = next;
    }
    (s.get(channel) - target).abs()
}

#[test]
fn every_channel_rises_monotonically_and_converges() {
    let active = inputs(true, true, true);
    for channel in [Channel::HoverLift, Channel::ActiveLift, Channel::Glow, Channel::Flip] {
        let err = run_monotone(channel, CardAnimState::default(), active);
        assert!(err < 1e-9, "{channel:?} residual {err}");
    }
    let dimmed = inputs(false, false, true);
    let err = run_monotone(Channel::Dim, CardAnimState::default(), dimmed);
    assert!(err < 1e-9);
}

#[test]
fn every_channel_falls_monotonically_and_converges() {
    let full = CardAnimState {
        hover_lift: 1.0,
        active_lift: 1.0,
        glow: 1.0,
        dim: 1.0,
        flip: 1.0,
        ..CardAnimState::default()
    };
    for channel in Channel::ALL {
        let err = run_monotone(channel, full, inputs(false, false, false));
        assert!(err < 1e-9, "{channel:?} residual {err}");
    }
}

#[test]
fn glow_targets_follow_hover_and_active() {
    assert_eq!(inputs(false, false, false).target(Channel::Glow), 0.0);
    assert_eq!(inputs(true, false, false).target(Channel::Glow), 0.7);
    assert_eq!(inputs(true, true, true).target(Channel::Glow), 1.0);
    assert_eq!(inputs(false, true, true).target(Channel::Dim), 0.0);
    assert_eq!(inputs(false, false, true).target(Channel::Dim), 1.0);
}

#[test]
fn deal_waits_for_delay_then_advances_linearly() {
    let tuning = AnimationTuning::default();
    let delay = tuning.deal_delay(2);
    let inp = CardInputs {
        deal_delay_s: delay,
        ..CardInputs::default()
    };
    let mut s = CardAnimState::default();
    while s.deal_clock + DT <= delay {
        s = s.advance(&inp, DT, &tuning);
        assert_eq!(s.deal, 0.0, "dealt early at {}", s.deal_clock);
    }
    let before = s.deal;
    s = s.advance(&inp, DT, &tuning);
    s = s.advance(&inp, DT, &tuning);
    assert!(s.deal > before);
    let step = DT / tuning.deal_duration_s;
    let a = s.deal;
    s = s.advance(&inp, DT, &tuning);
    assert!((s.deal - a - step).abs() < 1e-12);

    for _ in 0..120 {
        s = s.advance(&inp, DT, &tuning);
    }
    assert_eq!(s.deal, 1.0);
}

#[test]
fn negative_dt_is_a_no_op() {
    let tuning = AnimationTuning::default();
    let s = CardAnimState {
        glow: 0.5,
        ..CardAnimState::default()
    };
    let next = s.advance(&inputs(true, true, true), -1.0, &tuning);
    assert_eq!(next, s);
}

#[test]
fn visuals_interpolate_from_origin_to_slot() {
    let tuning = AnimationTuning::default();
    let slot = Vec3::new(3.1, 0.0, -0.06);

    let start = CardAnimState::default().visuals(slot, 0.06, &tuning);
    assert_eq!(start.position, DEAL_ORIGIN);
    assert_eq!(start.mesh_scale, 1.0);
    assert_eq!(start.front_opacity, 1.0);
    assert!((start.light_intensity - 0.3).abs() < 1e-12);

    let dealt = CardAnimState {
        deal: 1.0,
        hover_lift: 1.0,
        active_lift: 1.0,
        glow: 1.0,
        dim: 1.0,
        flip: 1.0,
        ..CardAnimState::default()
    }
    .visuals(slot, 0.06, &tuning);
    assert!((dealt.position.x - 3.1).abs() < 1e-12);
    assert!((dealt.position.y - 0.6).abs() < 1e-12);
    assert!((dealt.position.z + 0.06).abs() < 1e-12);
    assert_eq!(dealt.group_rotation_y, 0.06);
    assert!((dealt.mesh_rotation_y - std::f64::consts::PI).abs() < 1e-12);
    assert!((dealt.mesh_scale - 0.92).abs() < 1e-12);
    assert!((dealt.front_opacity - 0.5).abs() < 1e-12);
    assert!((dealt.light_intensity - 2.8).abs() < 1e-12);
    assert!((dealt.front_emissive - 1.25).abs() < 1e-12);
    assert!((dealt.back_emissive - 1.05).abs() < 1e-12);
}

#[test]
fn tuning_validation_rejects_bad_values() {
    assert!(AnimationTuning::default().validate().is_ok());
    let bad = AnimationTuning {
        flip_decay: 1.0,
        ..AnimationTuning::default()
    };
    assert!(bad.validate().is_err());
    let bad = AnimationTuning {
        deal_duration_s: 0.0,
        ..AnimationTuning::default()
    };
    assert!(bad.validate().is_err());
}
