use typed_store::{StoreError, TypedStore};

/// Two-point Gauss rule on [-1, 1]
fn gauss_points() -> Vec<(f64, f64)> {
    let x = 1.0 / 3.0_f64.sqrt();
    vec![(-x, 1.0), (x, 1.0)]
}

/// Evaluates `u(x) = x^2` at the quadrature points of one cell and leaves the
/// per-point values in the scratch store.
fn evaluate(scratch: &mut TypedStore<'_>, left: f64, right: f64) -> Result<(), StoreError> {
    let half = 0.5 * (right - left);
    let mid = 0.5 * (right + left);

    let values: Vec<f64> = scratch
        .get::<Vec<(f64, f64)>>("points")?
        .iter()
        .map(|(x, _)| {
            let y = mid + half * x;
            y * y
        })
        .collect();
    scratch.insert_owned(values, "values");
    scratch.insert_owned(half, "jacobian");
    Ok(())
}

/// Adds the cell integral into the caller's accumulator
fn integrate(scratch: &mut TypedStore<'_>) -> Result<(), StoreError> {
    let jacobian = *scratch.get::<f64>("jacobian")?;
    let cell: f64 = scratch
        .get::<Vec<(f64, f64)>>("points")?
        .iter()
        .zip(scratch.get::<Vec<f64>>("values")?)
        .map(|((_, w), v)| w * v * jacobian)
        .sum();
    *scratch.get_mut::<f64>("integral")? += cell;
    Ok(())
}

fn main() -> Result<(), StoreError> {
    env_logger::init();

    let points = gauss_points();
    let mut integral = 0.0_f64;
    let n_cells = 4;

    {
        let mut scratch = TypedStore::with_capacity(4);
        scratch.insert_alias_ref(&points, "points");
        scratch.insert_alias(&mut integral, "integral");

        for cell in 0..n_cells {
            let left = cell as f64 / n_cells as f64;
            let right = (cell + 1) as f64 / n_cells as f64;
            evaluate(&mut scratch, left, right)?;
            integrate(&mut scratch)?;
        }

        if let Err(e) = scratch.get_mut::<Vec<(f64, f64)>>("points") {
            println!("points are shared read-only: {}", e);
        }
    }

    println!("integral of x^2 over [0, 1] = {:.12}", integral);
    println!("exact                        = {:.12}", 1.0 / 3.0);
    Ok(())
}
