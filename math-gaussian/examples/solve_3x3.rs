//! Solve a small 3x3 system and print the result

use math_audio_gaussian::{residual_norm, solve};

fn main() {
    env_logger::init();

    let a = vec![
        vec![3.0, 2.0, -1.0],
        vec![2.0, -2.0, 4.0],
        vec![-1.0, 0.5, -1.0],
    ];
    let b = vec![1.0, -2.0, 0.0];

    match solve(&a, &b) {
        Ok(x) => {
            println!("solution: {:?}", x);
            println!("residual: {:.3e}", residual_norm(&a, &x, &b));
        }
        Err(e) => println!("{e}"),
    }
}
