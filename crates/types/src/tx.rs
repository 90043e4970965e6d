use alloy::{
    consensus::{Transaction, transaction::Recovered},
    primitives::{Address, U256},
};

/// The transaction fields read when formatting trace actions.
///
/// Implemented for any [`Recovered`] alloy transaction, which includes
/// [`RecoveredTx`](crate::RecoveredTx).
pub trait TracedTransaction {
    /// The address that signed the transaction.
    fn sender(&self) -> Address;

    /// The value transferred by the transaction.
    fn value(&self) -> U256;
}

impl<T: Transaction> TracedTransaction for Recovered<T> {
    fn sender(&self) -> Address {
        self.signer()
    }

    fn value(&self) -> U256 {
        Transaction::value(self.inner())
    }
}

impl<T: TracedTransaction + ?Sized> TracedTransaction for &T {
    fn sender(&self) -> Address {
        (**self).sender()
    }

    fn value(&self) -> U256 {
        (**self).value()
    }
}
