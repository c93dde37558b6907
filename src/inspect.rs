//! Runtime rendering of a sequence, for diagnostics.
//!
//! None of the algebra goes through here. Element names come from
//! [`core::any::type_name`], so they are best-effort and may differ between
//! compiler versions.

use core::fmt;

use crate::list::List;
use crate::seq::TypeSeq;

impl<L: List> fmt::Display for TypeSeq<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        L::write_names(f, false)?;
        f.write_str("]")
    }
}

impl<L: List> fmt::Debug for TypeSeq<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeSeq{}", self)
    }
}

impl<L: List> TypeSeq<L> {
    /// Emits the sequence as a `tracing` debug event and returns it.
    ///
    /// ```
    /// use tyseq::type_seq;
    ///
    /// let seq = type_seq![u8, bool].trace("handler arguments");
    /// assert_eq!(seq.size(), 2);
    /// ```
    pub fn trace(self, context: &str) -> Self {
        tracing::debug!(
            target: "tyseq",
            context,
            len = L::LEN,
            elements = %self,
            "type sequence"
        );
        self
    }
}
