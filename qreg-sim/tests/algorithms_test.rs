//! End-to-end runs of the oracle algorithms and programs

use qreg_core::gf2;
use qreg_gates::{ccx, cx, h, x};
use qreg_sim::algorithms::deutsch_jozsa::{self, FunctionClass, Oracle};
use qreg_sim::algorithms::{bernstein_vazirani, simon};
use qreg_sim::{Program, Simulator, SimulatorConfig, SimulatorError};
use qreg_state::{uniform_source, QubitRegister, StateError};

fn all_bit_strings(n: usize) -> impl Iterator<Item = Vec<u8>> {
    (0..1usize << n).map(move |v| (0..n).map(|q| ((v >> (n - 1 - q)) & 1) as u8).collect())
}

#[test]
fn test_simon_recovers_every_secret() {
    let _ = env_logger::builder().is_test(true).try_init();

    for n in 2..=4 {
        for secret in all_bit_strings(n).filter(|s| s.iter().any(|&b| b == 1)) {
            let config = SimulatorConfig::deterministic(1000 + n as u64);
            let found = simon::find_secret(&secret, &config).unwrap();
            assert_eq!(found, secret, "n={}", n);
        }
    }
}

#[test]
fn test_simon_rows_solve_directly() {
    // Rows sampled from the circuit feed straight into the solver
    let secret = vec![1, 0, 1, 1, 0];
    let mut rng = uniform_source(Some(77));
    let mut rows: Vec<Vec<u8>> = Vec::new();
    while rows.len() < secret.len() - 1 {
        let row = simon::sample_row(&secret, &mut rng).unwrap();
        if row.iter().all(|&b| b == 0) || rows.contains(&row) {
            continue;
        }
        rows.push(row);
        if rows.len() == secret.len() - 1 {
            match gf2::solve(&rows) {
                Ok(found) => assert_eq!(found, secret),
                Err(err) => {
                    assert!(err.is_recoverable());
                    rows.clear();
                }
            }
        }
    }
}

#[test]
fn test_simon_is_reproducible() {
    let config = SimulatorConfig::deterministic(3);
    let a = simon::find_secret(&[0, 1, 1, 1], &config).unwrap();
    let b = simon::find_secret(&[0, 1, 1, 1], &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_bernstein_vazirani_unseeded() {
    let config = SimulatorConfig::new();
    for hidden in all_bit_strings(5) {
        assert_eq!(bernstein_vazirani::find_secret(&hidden, &config).unwrap(), hidden);
    }
}

#[test]
fn test_deutsch_jozsa_every_mask() {
    let config = SimulatorConfig::deterministic(12);
    for mask in all_bit_strings(4) {
        let (oracle, expected) = if mask.iter().all(|&b| b == 0) {
            (Oracle::Constant(1), FunctionClass::Constant)
        } else {
            (Oracle::Balanced(mask), FunctionClass::Balanced)
        };
        assert_eq!(deutsch_jozsa::classify(&oracle, 4, &config).unwrap(), expected);
    }
}

#[test]
fn test_program_toffoli_adder_bit() {
    // Sum and carry of 1 + 1 into qubits 2 and 3
    let mut program = Program::new();
    program
        .gate("x 0", |reg| x(reg, 0))
        .gate("x 1", |reg| x(reg, 1))
        .gate("ccx 0 1 3", |reg| ccx(reg, 0, 1, 3))
        .gate("cx 0 2", |reg| cx(reg, 0, 2))
        .gate("cx 1 2", |reg| cx(reg, 1, 2));
    for q in 0..4 {
        program.measure(q);
    }

    let simulator = Simulator::new(SimulatorConfig::deterministic(0).with_shots(10)).unwrap();
    let result = simulator.run(4, program).unwrap();
    assert_eq!(result.measured_qubits(), vec![Some(1), Some(1), Some(0), Some(1)]);
    assert_eq!(result.counts.get_count(0b1101), 10);
}

#[test]
fn test_program_reports_failing_step() {
    let mut program = Program::new();
    program.gate("h 0", |reg| h(reg, 0)).gate("x 9", |reg| x(reg, 9));

    let mut reg = QubitRegister::new(2).unwrap();
    let mut rng = uniform_source(Some(1));
    let err = program.run(&mut reg, &mut rng).unwrap_err();
    assert!(matches!(err, SimulatorError::StepFailed { index: 1, .. }));
    assert!(matches!(
        err.root_cause(),
        SimulatorError::State(StateError::InvalidQubitIndex { index: 9, num_qubits: 2 })
    ));
}

#[test]
fn test_config_from_json_drives_simon() {
    let config = SimulatorConfig::from_json(r#"{ "seed": 99, "max_solver_attempts": 32 }"#).unwrap();
    assert_eq!(config.shots, 1024);
    assert_eq!(simon::find_secret(&[1, 1, 0, 1], &config).unwrap(), vec![1, 1, 0, 1]);
}
