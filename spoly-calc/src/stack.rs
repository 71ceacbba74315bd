use delegate::delegate;
use spoly::Poly;

/// The calculator's operand stack. The top is the most recently pushed.
#[derive(Clone, Default, Debug)]
pub struct Stack {
    inner: Vec<Poly>
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    delegate! { to self.inner {
        pub fn len(&self) -> usize;
        pub fn is_empty(&self) -> bool;
        pub fn push(&mut self, p: Poly);
        pub fn pop(&mut self) -> Option<Poly>;
        pub fn iter(&self) -> std::slice::Iter<'_, Poly>;
        #[call(last)]
        pub fn peek(&self) -> Option<&Poly>;
        #[call(last_mut)]
        pub fn peek_mut(&mut self) -> Option<&mut Poly>;
    }}

    /// The top and the one below it.
    pub fn peek2(&self) -> Option<(&Poly, &Poly)> {
        match self.inner.as_slice() {
            [.., q, p] => Some((p, q)),
            _ => None
        }
    }

    /// Pops the top and then the one below it. Leaves the stack untouched
    /// if it holds fewer than two.
    pub fn pop2(&mut self) -> Option<(Poly, Poly)> {
        if self.len() < 2 {
            return None
        }
        let p = self.inner.pop()?;
        let q = self.inner.pop()?;
        Some((p, q))
    }

    /// Pops the top `n` at once, in push order.
    pub fn pop_n(&mut self, n: usize) -> Option<Vec<Poly>> {
        let at = self.len().checked_sub(n)?;
        Some(self.inner.split_off(at))
    }
}
