use std::io;

use tl_physics::prelude::*;

fn main() -> io::Result<()> {
    // Deterministic 200-sample regression dataset on stdout.
    let config = DatasetConfig::default();
    let data = make_regression_data(&config);
    write_regression_csv(io::stdout().lock(), &data)
}
