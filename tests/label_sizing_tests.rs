use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use tick_sieve::api::{SelectionPolicy, TickSelectionConfig, TickSelector};
use tick_sieve::core::{AxisGeometry, AxisOrientation, TickCandidate, angled_label_width};
use tick_sieve::error::{TickError, TickResult};
use tick_sieve::text::{
    CachedTextMeasurer, FnTextMeasurer, HeuristicTextMeasurer, LabelFont, LabelSize,
    TextMeasurer,
};

// Ten pixels per character, eight pixels tall.
fn per_char(text: &str, _: &LabelFont) -> TickResult<LabelSize> {
    Ok(LabelSize::new(10.0 * text.chars().count() as f64, 8.0))
}

fn ticks(coords: &[f64]) -> Vec<TickCandidate<u32>> {
    coords
        .iter()
        .enumerate()
        .map(|(i, c)| TickCandidate::new(u32::try_from(i).expect("small index") + 1, *c))
        .collect()
}

#[test]
fn angled_width_uses_the_dominant_side() {
    assert_relative_eq!(angled_label_width(20.0, 10.0, 0.0), 20.0);
    assert_relative_eq!(
        angled_label_width(20.0, 10.0, 10.0),
        20.0 / 10f64.to_radians().cos(),
        epsilon = 1e-9
    );
    assert_relative_eq!(angled_label_width(20.0, 10.0, 30.0), 20.0, epsilon = 1e-9);
    assert_relative_eq!(angled_label_width(20.0, 10.0, 90.0), 10.0, epsilon = 1e-9);
}

#[test]
fn angles_fold_into_half_turns() {
    assert_relative_eq!(
        angled_label_width(20.0, 10.0, -45.0),
        angled_label_width(20.0, 10.0, 135.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        angled_label_width(20.0, 10.0, 190.0),
        angled_label_width(20.0, 10.0, 10.0),
        epsilon = 1e-9
    );
}

#[test]
fn empty_box_has_no_width() {
    assert_eq!(angled_label_width(0.0, 0.0, 45.0), 0.0);
}

#[test]
fn unit_suffix_can_push_ticks_out() {
    let coords = [10.0, 40.0, 70.0];
    let geometry = AxisGeometry::new(AxisOrientation::Bottom, 0.0, 100.0);
    let base = TickSelectionConfig::new()
        .with_policy(SelectionPolicy::PRESERVE_START)
        .with_min_tick_gap(2.0);

    let plain = TickSelector::new(base.clone(), FnTextMeasurer(per_char)).expect("valid");
    assert_eq!(plain.select(&ticks(&coords), geometry).expect("select").len(), 3);

    let with_unit =
        TickSelector::new(base.with_unit("ms"), FnTextMeasurer(per_char)).expect("valid");
    let values: Vec<u32> = with_unit
        .select(&ticks(&coords), geometry)
        .expect("select")
        .into_iter()
        .map(|d| d.value)
        .collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn vertical_axes_ignore_label_width_and_unit() {
    let geometry = AxisGeometry::new(AxisOrientation::Left, 0.0, 100.0);
    let config = TickSelectionConfig::new()
        .with_policy(SelectionPolicy::PRESERVE_END)
        .with_min_tick_gap(2.0)
        .with_unit("percent");
    let selector = TickSelector::new(config, FnTextMeasurer(per_char)).expect("valid");

    let decisions = selector
        .select_with_formatter(&ticks(&[10.0, 20.0, 30.0]), geometry, |_, _| {
            "a very long label".to_owned()
        })
        .expect("select");
    assert_eq!(decisions.len(), 3);
}

#[test]
fn formatter_receives_candidate_indices() {
    let geometry = AxisGeometry::new(AxisOrientation::Bottom, 0.0, 200.0);
    let config = TickSelectionConfig::new().with_policy(SelectionPolicy::PRESERVE_START);
    let selector = TickSelector::new(config, FnTextMeasurer(per_char)).expect("valid");

    // Only the middle label is long enough to collide with its neighbours.
    let decisions = selector
        .select_with_formatter(&ticks(&[20.0, 60.0, 100.0]), geometry, |_, index| {
            if index == 1 {
                "x".repeat(8)
            } else {
                "x".to_owned()
            }
        })
        .expect("select");
    let values: Vec<u32> = decisions.into_iter().map(|d| d.value).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn failing_measurer_degrades_to_point_sized_labels() {
    let failing = FnTextMeasurer(|_: &str, _: &LabelFont| -> TickResult<LabelSize> {
        Err(TickError::Measurement("no font backend".to_owned()))
    });
    let config = TickSelectionConfig::new()
        .with_policy(SelectionPolicy::PRESERVE_START)
        .with_min_tick_gap(1.5);
    let selector = TickSelector::new(config, failing).expect("valid");
    let geometry = AxisGeometry::new(AxisOrientation::Bottom, 0.0, 10.0);

    let decisions = selector
        .select(&ticks(&[0.0, 1.0, 2.0, 10.0]), geometry)
        .expect("select");
    let values: Vec<u32> = decisions.iter().map(|d| d.value).collect();
    assert_eq!(values, vec![1, 3, 4]);
}

#[test]
fn shared_cache_is_reused_across_passes_and_threads() {
    let measurer = Arc::new(CachedTextMeasurer::new(HeuristicTextMeasurer));
    let config = TickSelectionConfig::new().with_policy(SelectionPolicy::PRESERVE_END);
    let selector =
        Arc::new(TickSelector::new(config, Arc::clone(&measurer)).expect("valid config"));
    let geometry = AxisGeometry::new(AxisOrientation::Bottom, 0.0, 400.0);
    let candidates = Arc::new(ticks(&[20.0, 120.0, 220.0, 320.0]));

    let first = selector
        .select(candidates.as_slice(), geometry)
        .expect("first pass");
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let selector = Arc::clone(&selector);
            let candidates = Arc::clone(&candidates);
            thread::spawn(move || {
                selector
                    .select(candidates.as_slice(), geometry)
                    .expect("worker pass")
            })
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().expect("worker thread"), first);
    }

    let stats = measurer.stats();
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.size, 4);
    assert_eq!(stats.hits, 16);
}

#[test]
fn heuristic_measurer_is_usable_through_references() {
    let measurer = HeuristicTextMeasurer;
    let by_ref: &dyn TextMeasurer = &measurer;
    let font = LabelFont::default();
    assert_eq!(
        by_ref.measure("12.5", &font).expect("measure"),
        measurer.measure("12.5", &font).expect("measure")
    );
}
