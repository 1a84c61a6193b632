mod chain;

/// The core trait for computational units in Hydronix.
///
/// A `Component` maps an input to an output through [`call()`]. Components
/// must be deterministic: calling one twice with the same input produces the
/// same result, with no side effects. This makes them safe to invoke from
/// display code on every input change.
///
/// Components that cannot fail use [`std::convert::Infallible`] as their
/// error type.
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type; a component whose domain
    /// is closed under its input constraints uses `Infallible`.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this component with another, feeding this component's output
    /// into the next one.
    ///
    /// Chaining is type-safe: `Self::Output` must match `Next::Input`, and
    /// both components must share the same error type.
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use hydronix_core::Component;
    ///
    /// struct Square;
    /// impl Component for Square {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
    ///         Ok(input * input)
    ///     }
    /// }
    ///
    /// struct Halve;
    /// impl Component for Halve {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
    ///         Ok(input / 2.0)
    ///     }
    /// }
    ///
    /// let pipeline = Square.chain(Halve);
    /// assert_eq!(pipeline.call(4.0).unwrap(), 8.0);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Component<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Component<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Scale {
        factor: f64,
    }

    impl Component for Scale {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * self.factor)
        }
    }

    struct Offset {
        amount: f64,
    }

    impl Component for Offset {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input + self.amount)
        }
    }

    #[test]
    fn call_is_deterministic() {
        let scale = Scale { factor: 3.0 };
        assert_eq!(scale.call(2.0), Ok(6.0));
        assert_eq!(scale.call(2.0), Ok(6.0));
    }

    #[test]
    fn chain_applies_components_in_order() {
        let pipeline = Scale { factor: 2.0 }.chain(Offset { amount: 1.0 });
        assert_eq!(pipeline.call(10.0), Ok(21.0));

        let pipeline = Offset { amount: 1.0 }.chain(Scale { factor: 2.0 });
        assert_eq!(pipeline.call(10.0), Ok(22.0));
    }
}
