use approx::assert_relative_eq;
use fin_core::calculations::hydrodynamics::{resistance_of_shape, BladeShape, REFERENCE_BLADE_AREA_M2};
use fin_core::report::ApprovalPayload;
use fin_core::scenario::default_scenarios;
use fin_core::{
    compute_bending_profile, compute_default_params, compute_hydrodynamic_resistance, compute_laminate_stack,
    compute_section_inertia, compute_tip_angle, effective_thickness_at, solve_for_load, BeamParams, ProfileOptions,
    ResistanceOptions, SolverOptions,
};

fn stepped_params() -> BeamParams {
    BeamParams {
        length_mm: 300.0,
        layer_thickness_mm: 1.0,
        min_extra_layer_length_mm: 100.0,
        ..compute_default_params()
    }
}

#[test]
fn tip_angle_increases_with_load() {
    let params = compute_default_params();
    let options = ProfileOptions::default();
    let low = compute_tip_angle(10.0, &params, &options);
    let high = compute_tip_angle(50.0, &params, &options);
    assert!(high > low);
}

#[test]
fn solved_load_bends_blade_to_ninety_degrees() {
    let params = compute_default_params();
    let load = solve_for_load(&params, &SolverOptions::default());
    let angle = compute_tip_angle(load, &params, &ProfileOptions::default());
    assert!((angle - 90.0).abs() <= 0.1, "angle = {angle}");
}

#[test]
fn profile_sequences_share_length_and_start_at_zero() {
    let params = compute_default_params();
    for segments in [3, 20, 200] {
        let profile = compute_bending_profile(40.0, &params, &ProfileOptions::with_segments(segments));
        for sequence in [&profile.position_mm, &profile.angle_rad, &profile.x_mm, &profile.y_mm] {
            assert_eq!(sequence.len(), segments);
            assert_eq!(sequence[0], 0.0);
        }

        // The foot carries the largest bending moment
        assert_eq!(profile.curvature_per_mm.len(), segments);
        assert!(profile.curvature_per_mm[0] > 0.0);
    }
}

#[test]
fn thickness_steps_down_toward_tip() {
    let params = stepped_params();
    assert_relative_eq!(effective_thickness_at(100.0, &params), 4.0, epsilon = 1e-5);
    assert_relative_eq!(effective_thickness_at(200.0, &params), 3.0, epsilon = 1e-5);
    assert_relative_eq!(effective_thickness_at(300.0, &params), 2.0, epsilon = 1e-5);
    assert_relative_eq!(effective_thickness_at(350.0, &params), 2.0, epsilon = 1e-5);
}

#[test]
fn laminate_extra_layers_are_evenly_spaced() {
    let params = stepped_params();
    let stack = compute_laminate_stack(&params);
    assert_eq!(stack.extra_layer_lengths(), vec![200.0, 300.0]);
    assert!(stack.extra_layers.iter().all(|l| l.length_mm >= params.min_extra_layer_length_mm));
    assert_eq!(stack.length_mm, params.length_mm);
    assert_eq!(stack.width_mm, params.width_mm);
}

#[test]
fn foot_inertia_exceeds_tip_inertia() {
    let inertia = compute_section_inertia(&compute_default_params());
    assert!(inertia.foot_mm4 > inertia.tip_mm4);
    assert!(inertia.tip_mm4 > 0.0);
}

#[test]
fn unloaded_blade_resistance_is_area_ratio() {
    let params = compute_default_params();
    let resistance = compute_hydrodynamic_resistance(0.0, &params, &ResistanceOptions::default());
    let area_m2 = (params.width_mm * params.length_mm) / (1000.0 * 1000.0);
    assert!(resistance > 0.0);
    assert!((resistance - area_m2 / REFERENCE_BLADE_AREA_M2).abs() < 0.05);
}

#[test]
fn resistance_decreases_with_load() {
    let params = compute_default_params();
    let options = ResistanceOptions::default();
    let relaxed = compute_hydrodynamic_resistance(0.0, &params, &options);
    let loaded = compute_hydrodynamic_resistance(80.0, &params, &options);
    assert!(loaded < relaxed);
    assert!(loaded >= 0.0);
}

#[test]
fn segments_bent_past_ninety_degrees_contribute_nothing() {
    let params = compute_default_params();
    let shape = BladeShape {
        position_mm: &[0.0, 100.0, 200.0],
        angle_rad: &[0.0, std::f64::consts::PI, std::f64::consts::PI * 1.1],
    };
    assert_eq!(resistance_of_shape(shape, &params), 0.0);
}

#[test]
fn inputs_are_not_mutated() {
    let params = compute_default_params();
    let before = params.clone();
    let _ = solve_for_load(&params, &SolverOptions::default());
    let _ = compute_laminate_stack(&params);
    let _ = compute_hydrodynamic_resistance(40.0, &params, &ResistanceOptions::default());
    assert_eq!(params, before);
}

#[test]
fn default_scenario_approval_payload() {
    let scenario = default_scenarios().remove(0);
    let payload = ApprovalPayload::from_scenario(
        scenario.meta.id.clone(),
        scenario.meta.description.clone(),
        &scenario.params,
    );

    assert_eq!(payload.scenario.id, "default-params");
    assert_eq!(payload.params, compute_default_params());
    assert_eq!(payload.points.len(), 200);
    assert!(payload.load > 0.0 && payload.load < 100.0);
    assert!((payload.tip_angle_deg - 90.0).abs() <= 0.1);

    // Same inputs, same snapshot
    assert_eq!(payload, scenario.approval_payload());
}
