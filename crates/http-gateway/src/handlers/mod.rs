mod block_details;
mod latest_block;

pub(crate) use block_details::block_details_handler;
pub(crate) use latest_block::latest_block_handler;
