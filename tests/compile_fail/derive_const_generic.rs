#[derive(tyseq::Descriptor)]
struct Slots<const N: usize>;

fn main() {}
