use tyseq::{tag, type_seq};

const INDEX: usize = type_seq![u8, u16, u8].index_of(tag::<u8>());

fn main() {
    let _ = INDEX;
}
