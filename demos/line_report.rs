use tl_physics::prelude::*;

fn main() -> Result<(), MatchingError> {
    // Lossy microstrip-like line at 1 GHz.
    let params = LineParameters::new(0.05, 2.0e-7, 1.0e-8, 1.0e-10);
    let f0 = 1.0e9;
    let z_load = CScalar::new(100.0, 50.0);

    let pc = propagation_characteristics(&params, f0);
    println!(
        "gamma = {:.4} + j{:.4} 1/m, Z0 = {:.2} + j{:.2} ohm",
        pc.alpha(),
        pc.beta(),
        pc.z0.re,
        pc.z0.im
    );

    let section = TwoPort::line_section(pc.gamma, pc.z0, 0.1);
    let zin = section.input_impedance(z_load);
    let gamma_l = reflection_coefficient(z_load, pc.z0);
    println!(
        "Zin = {:.2} + j{:.2} ohm, |Gamma| = {:.4}, VSWR = {:.4}, RL = {:.2} dB, ML = {:.3} dB",
        zin.re,
        zin.im,
        gamma_l.norm(),
        vswr(gamma_l),
        return_loss_db(gamma_l),
        mismatch_loss_db(gamma_l)
    );

    let qw = quarter_wave_transform(&params, f0, z_load)?;
    println!(
        "quarter-wave: l = {:.4} m, Zt = {:.2} + j{:.2} ohm, VSWR_src = {:.6}",
        qw.length_m, qw.transformer_z.re, qw.transformer_z.im, qw.vswr_src
    );

    let stub = single_stub_shunt(&params, f0, 0.1, z_load, StubTermination::Short)?;
    println!(
        "single stub: d = {:.4} m, l_stub = {:.4} m, VSWR_src = {:.6}",
        stub.tap_m, stub.stub_m, stub.vswr_src
    );
    println!("{}", stub.summary);

    Ok(())
}
