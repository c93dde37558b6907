use tyseq::{index, type_seq};

fn main() {
    let _ = type_seq![u8, u16].remove(index::<2>());
}
