/// A scalar field over the plane.
///
/// Fields are opaque to the solvers: they are only ever sampled at points.
/// Implementations are expected to be pure and cheap to call.
///
/// Any `Fn(f64, f64) -> f64` is a field, so closures can be passed directly.
pub trait ScalarField {
    /// Evaluates the field at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Paraboloid centered at the origin.
    struct Bowl;

    impl ScalarField for Bowl {
        fn eval(&self, x: f64, y: f64) -> f64 {
            x * x + y * y
        }
    }

    fn sample(field: &impl ScalarField) -> f64 {
        field.eval(3.0, 4.0)
    }

    #[test]
    fn closures_are_fields() {
        assert_relative_eq!(sample(&|x: f64, y: f64| x - y), -1.0);
    }

    #[test]
    fn structs_are_fields() {
        assert_relative_eq!(sample(&Bowl), 25.0);
    }
}
