use rand::rngs::StdRng;
use rand::SeedableRng;
use ui::test_utils::RecordingSurface;
use ui::{
    Animation, AnimationLoop, Lang, LoopState, MemoryStore, PreferenceStore, Rain, RainConfig,
    Surface, Viewport,
};

fn rain_loop(seed: u64, viewport: Viewport) -> AnimationLoop<Rain<StdRng>, RecordingSurface> {
    let rain = Rain::new(RainConfig::default(), StdRng::seed_from_u64(seed));
    AnimationLoop::start(rain, RecordingSurface::new(), viewport)
}

#[test]
fn widescreen_viewport_gets_one_hundred_columns() {
    let lp = rain_loop(1, Viewport::new(1400, 800));
    assert_eq!(lp.animation().drops().len(), 100);
    assert_eq!(lp.surface().size(), (1400, 800));
}

#[test]
fn column_count_matches_floor_for_many_widths() {
    for width in [1, 13, 14, 15, 320, 1023, 1920, 3840] {
        let lp = rain_loop(2, Viewport::new(width, 600));
        assert_eq!(lp.animation().drops().len(), (width / 14) as usize, "width {width}");
    }
}

#[test]
fn zero_width_viewport_has_no_columns_and_paints_only_the_fade() {
    let mut lp = rain_loop(3, Viewport::new(0, 600));
    assert!(lp.animation().drops().is_empty());
    lp.tick();
    assert_eq!(lp.surface().paint_count(), 1);
}

#[test]
fn drops_only_grow_or_restart() {
    let mut lp = rain_loop(4, Viewport::new(700, 140));
    let mut previous = lp.animation().drops().to_vec();
    let mut restarts = 0;
    for _ in 0..2_000 {
        lp.tick();
        let current = lp.animation().drops().to_vec();
        for (before, after) in previous.iter().zip(&current) {
            if *after == 1 {
                // Reset to 0 then incremented.
                assert!(*before * 14 > 140, "restart from inside the surface");
                restarts += 1;
            } else {
                assert_eq!(*after, before + 1);
            }
        }
        previous = current;
    }
    assert!(restarts > 0);
}

#[test]
fn mean_ticks_to_restart_is_about_forty() {
    // Zero height puts every drop past the edge from the first tick.
    let mut lp = rain_loop(5, Viewport::new(1400, 0));
    let columns = lp.animation().drops().len();
    let mut waiting = vec![0u32; columns];
    let mut samples = Vec::new();
    for _ in 0..4_000 {
        lp.tick();
        for (i, drop) in lp.animation().drops().iter().enumerate() {
            waiting[i] += 1;
            if *drop == 1 {
                samples.push(waiting[i]);
                waiting[i] = 0;
            }
        }
    }
    assert!(samples.len() > 5_000);
    let mean = samples.iter().map(|&n| f64::from(n)).sum::<f64>() / samples.len() as f64;
    assert!((36.0..44.0).contains(&mean), "mean ticks to restart {mean}");
}

#[test]
fn no_paint_after_teardown() {
    let mut lp = rain_loop(6, Viewport::new(1400, 800));
    lp.tick();
    assert!(lp.teardown());
    lp.surface_mut().clear();

    for _ in 0..10 {
        assert!(!lp.tick());
    }
    assert_eq!(lp.surface().paint_count(), 0);
    assert_eq!(lp.state(), LoopState::Stopped);
}

#[test]
fn resize_recomputes_columns_and_surface() {
    let mut lp = rain_loop(7, Viewport::new(1400, 800));
    assert!(lp.resize(Viewport::new(700, 400)));
    assert_eq!(lp.animation().drops().len(), 50);
    assert_eq!(lp.surface().size(), (700, 400));
}

#[test]
fn animation_trait_is_usable_directly() {
    let mut surface = RecordingSurface::new();
    let mut rain = Rain::new(RainConfig::default(), StdRng::seed_from_u64(8));
    rain.resize(Viewport::new(28, 28), &mut surface);
    rain.frame(&mut surface);
    assert_eq!(surface.texts().count(), 2);
}

#[test]
fn locale_default_when_nothing_is_stored() {
    let prefs = PreferenceStore::new(MemoryStore::new());
    assert_eq!(prefs.load(Some("es-PY")), Lang::Es);
    assert_eq!(prefs.load(Some("fr-FR")), Lang::En);
}

#[test]
fn saved_language_survives_a_fresh_store() {
    let storage = MemoryStore::new();
    PreferenceStore::new(storage.clone()).save(Lang::Es);

    let reopened = PreferenceStore::new(storage);
    assert_eq!(reopened.load(Some("en-US")), Lang::Es);
    assert_eq!(reopened.load(None), Lang::Es);
}
