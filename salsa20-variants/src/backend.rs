use crate::{Permutation, SalsaCore};
use cipher::{
    Block, BlockSizeUser, ParBlocksSizeUser, StreamCipherBackend, StreamCipherSeekCore,
    consts::{U1, U64},
};

pub(crate) struct Backend<'a, P: Permutation>(pub(crate) &'a mut SalsaCore<P>);

impl<P: Permutation> BlockSizeUser for Backend<'_, P> {
    type BlockSize = U64;
}

impl<P: Permutation> ParBlocksSizeUser for Backend<'_, P> {
    type ParBlocksSize = U1;
}

impl<P: Permutation> StreamCipherBackend for Backend<'_, P> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        let pos = self.0.get_block_pos();
        block.copy_from_slice(&self.0.stream.keystream_block(pos));
        self.0.set_block_pos(pos.wrapping_add(1));
    }
}
