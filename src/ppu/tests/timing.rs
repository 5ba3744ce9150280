//! Dot-clock timing: VBlank edges, frame boundaries, odd-frame skip, NMI

use super::*;

#[test]
fn test_power_on_dot_position() {
    let ppu = new_ppu();
    // Just past the VBlank set point: the first observable VBlank is a full
    // frame after power-on
    assert_eq!(ppu.scanline(), 241);
    assert_eq!(ppu.dot(), 2);
    assert_eq!(ppu.frame_count(), 0);
}

#[test]
fn test_vblank_flag_rises_at_241_1() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 241, 1);
    assert_eq!(ppu.ppustatus & 0x80, 0, "clear before the set dot");

    ppu.step();
    assert_ne!(ppu.ppustatus & 0x80, 0, "set after processing (241, 1)");
}

#[test]
fn test_vblank_flag_clears_at_prerender_dot_1() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 241, 1);
    ppu.step();
    assert_ne!(ppu.ppustatus & 0x80, 0);

    step_to(&mut ppu, 261, 1);
    ppu.step();
    assert_eq!(ppu.ppustatus & 0x80, 0, "cleared at (-1, 1)");
}

#[test]
fn test_frame_boundary_is_260_to_prerender() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 260, 340);
    let frames = ppu.frame_count();
    assert!(!ppu.frame_complete());

    ppu.step();
    assert_eq!(ppu.scanline(), 261);
    assert_eq!(ppu.frame_count(), frames + 1);
    assert!(ppu.frame_complete());
}

#[test]
fn test_frame_complete_clears_at_prerender_dot_1() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 260, 340);
    ppu.step();
    assert!(ppu.frame_complete());

    ppu.step(); // processes (261, 0)
    ppu.step(); // processes (261, 1)
    assert!(!ppu.frame_complete());
}

#[test]
fn test_frame_length_with_rendering_disabled() {
    let mut ppu = new_ppu();

    // Align on a frame boundary, then measure two full frames
    step_to(&mut ppu, 261, 0);
    for _ in 0..2 {
        let mut dots = 0u64;
        let frame = ppu.frame_count();
        while ppu.frame_count() == frame {
            ppu.step();
            dots += 1;
        }
        assert_eq!(dots, DOTS_PER_FRAME, "every blanked frame is 89,342 dots");
    }
}

#[test]
fn test_odd_frames_skip_one_dot_with_rendering_enabled() {
    let mut ppu = new_ppu();
    ppu.write_register(PPUMASK, 0x08);

    step_to(&mut ppu, 261, 0);
    let mut lengths = Vec::new();
    for _ in 0..4 {
        let mut dots = 0u64;
        let frame = ppu.frame_count();
        while ppu.frame_count() == frame {
            ppu.step();
            dots += 1;
        }
        lengths.push(dots);
    }

    let mut sorted = lengths.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(
        sorted,
        vec![DOTS_PER_FRAME - 1, DOTS_PER_FRAME],
        "frames alternate 89,341/89,342"
    );
    assert_eq!(lengths[0], lengths[2], "parity alternates frame to frame");
    assert_ne!(lengths[0], lengths[1]);
}

#[test]
fn test_no_skip_when_rendering_disabled() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 261, 0);
    for _ in 0..3 {
        let mut dots = 0u64;
        let frame = ppu.frame_count();
        while ppu.frame_count() == frame {
            ppu.step();
            dots += 1;
        }
        assert_eq!(dots, DOTS_PER_FRAME);
    }
}

#[test]
fn test_nmi_raised_when_enabled() {
    let mut ppu = new_ppu();
    ppu.write_register(PPUCTRL, 0x80);

    step_to(&mut ppu, 241, 1);
    assert!(!ppu.take_nmi_request());

    ppu.step();
    assert!(ppu.take_nmi_request(), "NMI on the VBlank set dot");
    assert!(!ppu.take_nmi_request(), "edge is one-shot");
}

#[test]
fn test_no_nmi_when_disabled() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 241, 1);
    ppu.step();
    assert!(!ppu.take_nmi_request());
}

#[test]
fn test_enabling_nmi_mid_vblank_raises_immediately() {
    let mut ppu = new_ppu();

    // Reach the next VBlank with NMI disabled, flag set
    step_to(&mut ppu, 241, 1);
    ppu.step();
    step_to(&mut ppu, 250, 0);
    assert!(!ppu.take_nmi_request());

    ppu.write_register(PPUCTRL, 0x80);
    assert!(ppu.take_nmi_request(), "0->1 with the flag set re-raises");
}

#[test]
fn test_disabling_nmi_withdraws_pending_request() {
    let mut ppu = new_ppu();
    ppu.write_register(PPUCTRL, 0x80);

    step_to(&mut ppu, 241, 1);
    ppu.step();

    ppu.write_register(PPUCTRL, 0x00);
    assert!(!ppu.take_nmi_request(), "1->0 cancels the unsampled edge");
}

#[test]
fn test_enabling_nmi_outside_vblank_does_not_raise() {
    let mut ppu = new_ppu();

    step_to(&mut ppu, 100, 0);
    ppu.write_register(PPUCTRL, 0x80);
    assert!(!ppu.take_nmi_request());
}
