use ark_ec::CurveGroup;

// Point Addition - Adds two points of a curve group.
pub fn add_points<G: CurveGroup>(point1: G, point2: G) -> G {
    point1 + point2
}

// Scalar Multiplication - Multiplies a point of a curve group by a field scalar.
pub fn scalar_multiply<G: CurveGroup>(point: G, scalar: G::ScalarField) -> G {
    point * scalar
}

// Point Doubling - Doubles a point `times` times, i.e. scales it by 2^times.
pub fn double_times<G: CurveGroup>(point: G, times: usize) -> G {
    let mut result = point;
    for _ in 0..times {
        result.double_in_place();
    }
    result
}
