use solgate_rpc::SolanaRpc;

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct GatewayContext<R>
where
    R: SolanaRpc,
{
    /// Client used to reach the remote node.
    pub rpc: R,
}
