use approx::assert_relative_eq;
use h2on2::components::{Nitrogen, PureComponent, Water};
use h2on2::{
    binary, CompositionalFluidState, Fidelity, FluidSystemError, H2ON2FluidSystem,
    NullParameterCache, GAS_PHASE_IDX, H2O_IDX, LIQUID_PHASE_IDX, N2_IDX,
};
use num_dual::Dual64;

const CACHE: NullParameterCache = NullParameterCache;

fn state(t: f64, p: f64, x_liquid: [f64; 2], x_gas: [f64; 2]) -> CompositionalFluidState<f64> {
    let mut state = CompositionalFluidState::new([Water.molar_mass(), Nitrogen.molar_mass()]);
    state
        .set_temperature(t)
        .set_pressure(LIQUID_PHASE_IDX, p)
        .set_pressure(GAS_PHASE_IDX, p)
        .set_mole_fractions(LIQUID_PHASE_IDX, x_liquid)
        .set_mole_fractions(GAS_PHASE_IDX, x_gas);
    state
}

#[test]
fn properties_are_finite_and_positive_in_the_supported_range() {
    for fidelity in [Fidelity::Simple, Fidelity::Complex] {
        let system = H2ON2FluidSystem::new(fidelity).unwrap();
        for t in [280.0, 320.0, 400.0, 550.0] {
            for p in [5e4, 1e5, 1e6, 1e7] {
                let state = state(t, p, [0.995, 0.005], [0.2, 0.8]);
                for phase_idx in [LIQUID_PHASE_IDX, GAS_PHASE_IDX] {
                    let rho: f64 = system.density(&state, &CACHE, phase_idx);
                    let mu: f64 = system.viscosity(&state, &CACHE, phase_idx);
                    let h: f64 = system.enthalpy(&state, &CACHE, phase_idx);
                    let lambda: f64 = system.thermal_conductivity(&state, &CACHE, phase_idx);
                    let c_p: f64 = system.heat_capacity(&state, &CACHE, phase_idx);
                    let d: f64 = system.diffusion_coefficient(&state, &CACHE, phase_idx, N2_IDX);
                    assert!(rho > 0.0 && rho.is_finite(), "density at {t} K, {p} Pa");
                    assert!(mu > 0.0 && mu.is_finite(), "viscosity at {t} K, {p} Pa");
                    assert!(h.is_finite(), "enthalpy at {t} K, {p} Pa");
                    assert!(lambda > 0.0 && lambda.is_finite());
                    assert!(c_p > 0.0 && c_p.is_finite());
                    assert!(d > 0.0 && d.is_finite());
                }
            }
        }
    }
}

#[test]
fn tabulated_water_matches_the_direct_correlations() {
    let tabulated = H2ON2FluidSystem::new(Fidelity::Complex).unwrap();
    let direct = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let state = state(312.77, 3.456e6, [0.99, 0.01], [0.12, 0.88]);

    for phase_idx in [LIQUID_PHASE_IDX, GAS_PHASE_IDX] {
        let rho_tab: f64 = tabulated.density(&state, &CACHE, phase_idx);
        let rho: f64 = direct.density(&state, &CACHE, phase_idx);
        assert_relative_eq!(rho_tab, rho, max_relative = 1e-3);

        let h_tab: f64 = tabulated.enthalpy(&state, &CACHE, phase_idx);
        let h: f64 = direct.enthalpy(&state, &CACHE, phase_idx);
        assert_relative_eq!(h_tab, h, max_relative = 1e-3);
    }
}

#[test]
fn gas_density_is_the_sum_of_the_partial_densities() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (350.0, 2e6);
    let state = state(t, p, [1.0, 0.0], [0.3, 0.7]);

    let rho: f64 = system.density(&state, &CACHE, GAS_PHASE_IDX);
    let expected = Water.gas_density(t, 0.3 * p) + Nitrogen.gas_density(t, 0.7 * p);
    assert_relative_eq!(rho, expected, max_relative = 1e-12);
}

#[test]
fn liquid_density_stays_close_to_pure_water() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (300.0, 1e5);
    let state = state(t, p, [0.99, 0.01], [0.1, 0.9]);

    let rho: f64 = system.density(&state, &CACHE, LIQUID_PHASE_IDX);
    let pure = Water.liquid_density(t, p);
    // 1% dissolved nitrogen perturbs the density by less than 1%
    assert!(rho > 0.0);
    assert_relative_eq!(rho, pure, max_relative = 1e-2);
    // and the volume additivity rule is matched exactly
    let expected = pure / Water.molar_mass()
        * (0.99 * Water.molar_mass() + 0.01 * Nitrogen.molar_mass());
    assert_relative_eq!(rho, expected, max_relative = 1e-13);
}

#[test]
fn single_component_gas_limits() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (400.0, 5e5);

    // pure steam
    let pure_h2o = state(t, p, [1.0, 0.0], [1.0, 0.0]);
    let rho: f64 = system.density(&pure_h2o, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(rho, Water.gas_density(t, p), max_relative = 1e-12);
    let mu: f64 = system.viscosity(&pure_h2o, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(
        mu,
        Water.gas_viscosity(t, Water.vapor_pressure(t)),
        max_relative = 1e-12
    );
    let h: f64 = system.enthalpy(&pure_h2o, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(h, Water.gas_enthalpy(t, p), max_relative = 1e-12);
    let c_p: f64 = system.heat_capacity(&pure_h2o, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(c_p, Water.gas_heat_capacity(t, p), max_relative = 1e-12);

    // pure nitrogen
    let pure_n2 = state(t, p, [1.0, 0.0], [0.0, 1.0]);
    let rho: f64 = system.density(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(rho, Nitrogen.gas_density(t, p), max_relative = 1e-12);
    let mu: f64 = system.viscosity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(mu, Nitrogen.gas_viscosity(t, p), max_relative = 1e-12);
    let h: f64 = system.enthalpy(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(h, Nitrogen.gas_enthalpy(t, p), max_relative = 1e-12);
    let c_p: f64 = system.heat_capacity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(c_p, Nitrogen.gas_heat_capacity(t, p), max_relative = 1e-12);
}

#[test]
fn fugacity_coefficients_are_independent_of_composition() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (320.0, 3e5);
    let dilute = state(t, p, [0.999, 0.001], [0.1, 0.9]);
    let rich = state(t, p, [0.9, 0.1], [0.5, 0.5]);

    for s in [&dilute, &rich] {
        let phi_h2o: f64 = system.fugacity_coefficient(s, &CACHE, LIQUID_PHASE_IDX, H2O_IDX);
        assert_relative_eq!(phi_h2o * p, Water.vapor_pressure(t), max_relative = 1e-12);

        let phi_n2: f64 = system.fugacity_coefficient(s, &CACHE, LIQUID_PHASE_IDX, N2_IDX);
        assert_relative_eq!(phi_n2 * p, binary::henry(t), max_relative = 1e-12);

        let phi_gas: f64 = system.fugacity_coefficient(s, &CACHE, GAS_PHASE_IDX, H2O_IDX);
        assert_relative_eq!(phi_gas, 1.0);
    }
}

#[test]
fn diffusion_coefficient_ignores_the_component_argument() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let state = state(330.0, 1e5, [0.99, 0.01], [0.2, 0.8]);

    for phase_idx in [LIQUID_PHASE_IDX, GAS_PHASE_IDX] {
        let d_h2o: f64 = system.diffusion_coefficient(&state, &CACHE, phase_idx, H2O_IDX);
        let d_n2: f64 = system.diffusion_coefficient(&state, &CACHE, phase_idx, N2_IDX);
        assert_eq!(d_h2o, d_n2);
    }
}

#[test]
fn fidelity_levels_differ_for_mixed_gas() {
    let simple = H2ON2FluidSystem::untabulated(Fidelity::Simple);
    let complex = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let mixed = state(350.0, 1e6, [0.99, 0.01], [0.4, 0.6]);

    let lambda_simple: f64 = simple.thermal_conductivity(&mixed, &CACHE, GAS_PHASE_IDX);
    let lambda_complex: f64 = complex.thermal_conductivity(&mixed, &CACHE, GAS_PHASE_IDX);
    assert!((lambda_simple - lambda_complex).abs() > 1e-6);

    let c_p_simple: f64 = simple.heat_capacity(&mixed, &CACHE, GAS_PHASE_IDX);
    let c_p_complex: f64 = complex.heat_capacity(&mixed, &CACHE, GAS_PHASE_IDX);
    assert!((c_p_simple - c_p_complex).abs() > 1.0);
}

#[test]
fn fidelity_levels_agree_in_the_pure_nitrogen_limit() {
    let simple = H2ON2FluidSystem::untabulated(Fidelity::Simple);
    let complex = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (350.0, 1e6);
    let pure_n2 = state(t, p, [1.0, 0.0], [0.0, 1.0]);

    // nitrogen's gas heat capacity is the rigid rotor value, so both
    // fidelity levels evaluate the same expression
    let c_p_simple: f64 = simple.heat_capacity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    let c_p_complex: f64 = complex.heat_capacity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(c_p_simple, c_p_complex, max_relative = 1e-14);

    let rho_simple: f64 = simple.density(&pure_n2, &CACHE, GAS_PHASE_IDX);
    let rho_complex: f64 = complex.density(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(rho_simple, rho_complex, max_relative = 1e-12);

    let mu_simple: f64 = simple.viscosity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    let mu_complex: f64 = complex.viscosity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(mu_simple, mu_complex, max_relative = 1e-12);

    // the partial pressure sum keeps water's zero-pressure conductivity,
    // so the two levels differ by exactly that term
    let lambda_simple: f64 = simple.thermal_conductivity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    let lambda_complex: f64 = complex.thermal_conductivity(&pure_n2, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(
        lambda_complex - lambda_simple,
        Water.gas_thermal_conductivity(t, 0.0),
        max_relative = 1e-10
    );
}

#[test]
fn degenerate_composition_exercises_the_density_floor() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Simple);
    let mut state = state(300.0, 1e5, [1.0, 0.0], [0.0, 0.0]);
    state.set_mole_fractions(GAS_PHASE_IDX, [1e-7, 1e-7]);

    let rho: f64 = system.density(&state, &CACHE, GAS_PHASE_IDX);
    assert!(rho.is_finite());
    // the 1e-5 floor replaces the actual mole fraction sum of 2e-7
    let mean_molar_mass = 0.5 * (Water.molar_mass() + Nitrogen.molar_mass());
    let expected = 1e5 / (8.31446261815324 * 300.0) * mean_molar_mass / 1e-5;
    assert_relative_eq!(rho, expected, max_relative = 1e-10);
}

#[test]
fn degenerate_composition_exercises_the_viscosity_floor() {
    let system = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let mut state = state(300.0, 1e5, [1.0, 0.0], [0.0, 0.0]);
    state.set_mole_fractions(GAS_PHASE_IDX, [1e-12, 1e-12]);

    let mu: f64 = system.viscosity(&state, &CACHE, GAS_PHASE_IDX);
    assert!(mu.is_finite() && mu > 0.0);
}

#[test]
fn dual_numbers_give_the_temperature_derivative() {
    let direct = H2ON2FluidSystem::untabulated(Fidelity::Complex);
    let (t, p) = (350.0, 1e6);

    let mut dual_state =
        CompositionalFluidState::new([Water.molar_mass(), Nitrogen.molar_mass()]);
    dual_state
        .set_temperature(Dual64::from_re(t).derivative())
        .set_pressure(GAS_PHASE_IDX, Dual64::from_re(p))
        .set_mole_fractions(
            GAS_PHASE_IDX,
            [Dual64::from_re(0.3), Dual64::from_re(0.7)],
        );
    let rho: Dual64 = direct.density(&dual_state, &CACHE, GAS_PHASE_IDX);

    let h = 1e-3;
    let low: f64 = direct.density(
        &state(t - h, p, [1.0, 0.0], [0.3, 0.7]),
        &CACHE,
        GAS_PHASE_IDX,
    );
    let high: f64 = direct.density(
        &state(t + h, p, [1.0, 0.0], [0.3, 0.7]),
        &CACHE,
        GAS_PHASE_IDX,
    );
    assert_relative_eq!(rho.eps, (high - low) / (2.0 * h), max_relative = 1e-6);

    // requesting a plain result from a dual state truncates to the value
    let plain: f64 = direct.density(&dual_state, &CACHE, GAS_PHASE_IDX);
    assert_relative_eq!(plain, rho.re, max_relative = 1e-14);
}

#[test]
fn invalid_tabulation_ranges_are_reported() {
    let grid = h2on2::components::TabulationGrid {
        temp_min: 400.0,
        temp_max: 300.0,
        ..Default::default()
    };
    let result = H2ON2FluidSystem::with_tabulation(Fidelity::Complex, grid);
    assert!(matches!(
        result,
        Err(FluidSystemError::InvalidRange("temperature", 400.0, 300.0))
    ));
}
