use tyseq::{tag, type_seq};

struct Opaque;

fn main() {
    let _ = type_seq![Opaque, u8].contains(tag::<u8>());
}
