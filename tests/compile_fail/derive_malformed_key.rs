#[derive(tyseq::Descriptor)]
#[descriptor(key = Position)]
struct Position;

fn main() {}
