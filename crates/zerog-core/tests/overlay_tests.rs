use zerog_core::{
    end_fade, AudioCue, AudioLevels, AudioReactiveOverlay, HitTier, OverlayEvent, ScriptPhase,
    SpaceConfig, AMBIENT_TRACK, HANS_ZIMMER_TRACK,
};

const DURATION: f64 = 240.0;

fn overlay() -> AudioReactiveOverlay {
    AudioReactiveOverlay::new(&SpaceConfig::default().tracks)
}

fn cue(track_id: &str, t: f64, playing: bool, levels: Option<AudioLevels>) -> AudioCue<'_> {
    AudioCue {
        track_id,
        current_time: t,
        duration: DURATION,
        playing,
        levels,
    }
}

fn bass(bass: f32) -> Option<AudioLevels> {
    Some(AudioLevels {
        energy: 0.5,
        bass,
        peak: bass,
    })
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn build_window_quarter_progress() {
    let mut o = overlay();
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 140.0, true, None), 0.0);
    assert_eq!(f.phase, ScriptPhase::Build);
    assert!(approx(f.darkness, 0.275), "darkness {}", f.darkness);
    assert!(approx(f.parasite_opacity, 0.375), "parasite {}", f.parasite_opacity);
    assert_eq!(f.flicker_suppression, 1.0);
    assert!(approx(f.vignette_opacity, 0.25));
    assert!(approx(f.vignette_scale, 1.6));
}

#[test]
fn flicker_falls_only_in_second_half_of_build() {
    let mut o = overlay();
    let at = |o: &mut AudioReactiveOverlay, t| o.update(&cue(HANS_ZIMMER_TRACK, t, true, None), 0.0);
    assert_eq!(at(&mut o, 146.0).flicker_suppression, 1.0);
    assert!(approx(at(&mut o, 152.0).flicker_suppression, 0.5));
    assert!(at(&mut o, 157.9).flicker_suppression < 0.02);
    let dark = at(&mut o, 157.9).darkness;
    assert!(dark <= 0.92 + 1e-6);
}

#[test]
fn full_dark_mutes_continuous_effects() {
    let mut o = overlay();
    o.update(&cue(HANS_ZIMMER_TRACK, 158.5, true, bass(0.1)), 0.0);
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 158.6, true, bass(0.95)), 100.0);
    assert_eq!(f.phase, ScriptPhase::FullDark);
    assert_eq!(f.darkness, 0.92);
    assert_eq!(f.flicker_suppression, 0.0);
    assert_eq!(f.energy_opacity, 0.0);
    assert_eq!(f.flash_opacity, 0.0);
    assert!(approx(f.vignette_scale, 1.0));
}

#[test]
fn reveal_reverses_towards_continuous_state() {
    let mut o = overlay();
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 171.0, true, None), 0.0);
    assert_eq!(f.phase, ScriptPhase::Reveal);
    assert!(approx(f.darkness, 0.46));
    assert!(approx(f.parasite_opacity, 0.5));
    assert!(approx(f.flicker_suppression, 0.5));
    let after = o.update(&cue(HANS_ZIMMER_TRACK, 176.0, true, None), 0.0);
    assert_eq!(after.phase, ScriptPhase::Inactive);
    assert_eq!(after.darkness, 0.0);
}

#[test]
fn strike_fires_once_and_rearms_after_seeking_back() {
    let mut o = overlay();
    let strike_count = |f: &zerog_core::OverlayFrame| {
        f.events
            .iter()
            .filter(|e| matches!(e, OverlayEvent::Strike { .. }))
            .count()
    };
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 158.0, true, None), 0.0);
    assert_eq!(strike_count(&f), 1);
    assert_eq!(f.strike_opacity, 1.0);
    assert!(o.has_fired(HANS_ZIMMER_TRACK));

    let mut now = 0.0;
    for t in [159.0, 161.0, 163.0, 165.9] {
        now += 16.0;
        assert_eq!(strike_count(&o.update(&cue(HANS_ZIMMER_TRACK, t, true, None), now)), 0);
    }
    // Scrubbing forward past the window and back into it does not refire.
    o.update(&cue(HANS_ZIMMER_TRACK, 170.0, true, None), now + 16.0);
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 160.0, true, None), now + 32.0);
    assert_eq!(strike_count(&f), 0);

    // Seeking before the window rearms the guard.
    o.update(&cue(HANS_ZIMMER_TRACK, 100.0, true, None), now + 48.0);
    assert!(!o.has_fired(HANS_ZIMMER_TRACK));
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 159.0, true, None), now + 64.0);
    assert_eq!(strike_count(&f), 1);
}

#[test]
fn strike_decays_and_ignores_suppression() {
    let mut o = overlay();
    o.update(&cue(HANS_ZIMMER_TRACK, 158.0, true, None), 1000.0);
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 158.3, true, None), 1300.0);
    assert_eq!(f.flicker_suppression, 0.0);
    assert!(f.strike_opacity > 0.0 && f.strike_opacity < 1.0);
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 158.7, true, None), 1600.0);
    assert_eq!(f.strike_opacity, 0.0);
}

#[test]
fn paused_playback_keeps_scripted_effects_only() {
    let mut o = overlay();
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 160.0, false, bass(0.9)), 0.0);
    assert_eq!(f.darkness, 0.92);
    assert_eq!(f.energy_opacity, 0.0);
    assert!(f.events.is_empty());
    assert!(!o.has_fired(HANS_ZIMMER_TRACK));
}

#[test]
fn missing_analysis_still_runs_the_script() {
    let mut o = overlay();
    let f = o.update(&cue(HANS_ZIMMER_TRACK, 140.0, true, None), 0.0);
    assert!(f.darkness > 0.0);
    assert_eq!(f.energy_opacity, 0.0);
    assert_eq!(f.energy_scale, 1.0);
    assert_eq!(f.flash_opacity, 0.0);
}

#[test]
fn bass_spikes_flash_by_tier() {
    let mut o = overlay();
    o.update(&cue(AMBIENT_TRACK, 10.0, true, bass(0.2)), 0.0);
    let f = o.update(&cue(AMBIENT_TRACK, 10.016, true, bass(0.9)), 16.0);
    assert_eq!(f.events.as_slice(), &[OverlayEvent::Hit(HitTier::Hard)]);
    assert_eq!(f.flash_opacity, 1.0);
    assert_eq!(o.current_flash_tier(), Some(HitTier::Hard));

    // Hard flash is gone after 0.18s.
    let f = o.update(&cue(AMBIENT_TRACK, 10.3, true, bass(0.85)), 300.0);
    assert!(f.events.is_empty());
    assert_eq!(f.flash_opacity, 0.0);

    let mut o = overlay();
    o.update(&cue(AMBIENT_TRACK, 10.0, true, bass(0.3)), 0.0);
    let f = o.update(&cue(AMBIENT_TRACK, 10.016, true, bass(0.65)), 16.0);
    assert_eq!(f.events.as_slice(), &[OverlayEvent::Hit(HitTier::Soft)]);
    assert!(approx(f.flash_opacity, 0.45));
}

#[test]
fn steady_bass_does_not_flash() {
    let mut o = overlay();
    for i in 0..20 {
        let f = o.update(&cue(AMBIENT_TRACK, i as f64 * 0.016, true, bass(0.9)), i as f64 * 16.0);
        assert!(f.events.is_empty());
    }
}

#[test]
fn soft_hit_does_not_replace_bright_hard_flash() {
    let mut o = overlay();
    o.update(&cue(AMBIENT_TRACK, 1.0, true, bass(0.1)), 0.0);
    o.update(&cue(AMBIENT_TRACK, 1.016, true, bass(0.9)), 16.0);
    o.update(&cue(AMBIENT_TRACK, 1.032, true, bass(0.3)), 32.0);
    let f = o.update(&cue(AMBIENT_TRACK, 1.048, true, bass(0.65)), 48.0);
    assert!(f.events.is_empty());
    assert_eq!(o.current_flash_tier(), Some(HitTier::Hard));
}

#[test]
fn energy_field_follows_levels() {
    let mut o = overlay();
    let levels = Some(AudioLevels {
        energy: 0.5,
        bass: 0.4,
        peak: 0.7,
    });
    let f = o.update(&cue(AMBIENT_TRACK, 30.0, true, levels), 0.0);
    assert!(approx(f.energy_opacity, 0.4));
    assert!(approx(f.energy_scale, 1.2));
}

#[test]
fn end_of_track_fades_every_opacity() {
    assert_eq!(end_fade(100.0, 240.0), 1.0);
    assert!(approx(end_fade(237.5, 240.0), 0.5));
    assert_eq!(end_fade(240.0, 240.0), 0.0);
    assert_eq!(end_fade(10.0, f64::NAN), 1.0);
    assert_eq!(end_fade(10.0, f64::INFINITY), 1.0);

    let mut o = overlay();
    let mut c = cue(AMBIENT_TRACK, 236.0, true, bass(0.5));
    c.duration = 240.0;
    let f = o.update(&c, 0.0);
    assert!(approx(f.energy_opacity, 0.4 * 0.8));
}

#[test]
fn unknown_track_uses_default_theme_and_no_script() {
    let mut o = overlay();
    let f = o.update(&cue("nope", 160.0, true, None), 0.0);
    assert_eq!(f.phase, ScriptPhase::Inactive);
    assert!(f.is_blank());
    assert_eq!(f.theme, zerog_core::TrackTheme::default());
}
