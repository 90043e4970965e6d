use alloy::consensus::{EthereumTxEnvelope, TxEip4844, transaction::Recovered};

/// Signed transaction.
pub type TransactionSigned = EthereumTxEnvelope<TxEip4844>;

/// A signed transaction with its recovered sender. This is the transaction
/// type handed to the tracer by block execution.
pub type RecoveredTx = Recovered<TransactionSigned>;
