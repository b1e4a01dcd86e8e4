use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

use std::collections::VecDeque;

/// Build a deterministic System of size `n`: one heavy anchor at the origin
/// plus scattered light bodies. No rand needed.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    bodies.push(Body {
        x: NVec2::zeros(),
        v: NVec2::zeros(),
        m: 1.98892e30,
        radius: 30.0,
        color: [255, 255, 0],
        anchor: true,
        distance_to_anchor: 0.0,
        trail: VecDeque::new(),
    });

    for i in 1..n {
        let i_f = i as f64;
        bodies.push(Body {
            x: NVec2::new((i_f * 0.37).sin() * 5.0 * AU, (i_f * 0.13).cos() * 5.0 * AU),
            v: NVec2::new((i_f * 0.07).sin() * 1.0e4, (i_f * 0.11).cos() * 1.0e4),
            m: 5.9742e24,
            radius: 10.0,
            color: [255, 255, 255],
            anchor: false,
            distance_to_anchor: 0.0,
            trail: VecDeque::new(),
        });
    }

    System { bodies, t: 0.0 }
}

/// One full force pass over the system without integrating, returning the
/// accumulated force so the work cannot be optimized away.
fn force_pass(sys: &mut System, gravity: &NewtonianGravity) -> NVec2 {
    let mut acc = NVec2::zeros();
    for i in 0..sys.bodies.len() {
        let (updated, rest) = sys.bodies.split_at_mut(i);
        if let Some((body, pending)) = rest.split_first_mut() {
            for other in updated.iter().chain(pending.iter()) {
                acc += gravity.pairwise_attraction(body, other);
            }
        }
    }
    acc
}

pub fn bench_attraction() {
    // Different system sizes to test
    let ns = [8, 16, 32, 64, 128, 256, 512, 1024];

    let params = Parameters::default();
    let gravity = NewtonianGravity {
        g: params.g,
        min_separation: params.min_separation,
    };

    for n in ns {
        let mut sys = make_system(n);

        // Warm up
        force_pass(&mut sys, &gravity);

        let t0 = Instant::now();
        let acc = force_pass(&mut sys, &gravity);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {dt:10.6} s  (acc {:.3e})", acc.norm());
    }
}

pub fn bench_euler() {
    // Test different N values
    let ns = [8, 16, 32, 64, 128, 256, 512, 1024];
    let steps = 10; // integrator steps per size

    // Cap the trail so long benches measure integration, not allocation
    let params = Parameters {
        trail_limit: Some(64),
        ..Parameters::default()
    };

    let gravity = NewtonianGravity {
        g: params.g,
        min_separation: params.min_separation,
    };

    for n in ns {
        let mut sys = make_system(n);

        // Warm-up
        euler_step(&mut sys, &gravity, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &gravity, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, euler step = {per_step:10.6} s");
    }
}

/// Benchmark euler_step over a dense range of n.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_euler_curve() {
    println!("N,step_ms");

    let params = Parameters {
        trail_limit: Some(64),
        ..Parameters::default()
    };

    let gravity = NewtonianGravity {
        g: params.g,
        min_separation: params.min_separation,
    };

    for n in (16..=1024).step_by(16) {
        // Small n: average over several steps to smooth noise
        let steps = if n <= 256 { 20 } else { 5 };

        let mut sys = make_system(n);

        // Warm-up one step
        euler_step(&mut sys, &gravity, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &gravity, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
