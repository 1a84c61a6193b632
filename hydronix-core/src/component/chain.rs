use crate::Component;

/// Sequential composition of two compatible components.
///
/// Built by [`Component::chain()`]. The first component's output type must
/// equal the second's input type, and both must share an error type.
pub(crate) struct Chain<A, B>
where
    A: Component,
    B: Component<Input = A::Output, Error = A::Error>,
{
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Component for Chain<A, B>
where
    A: Component,
    B: Component<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.call(input)?;
        self.second.call(intermediate)
    }
}
