use reversible_mt19937::ReversibleMt19937;

fn main() {
    let mut gen = ReversibleMt19937::new(5489);
    for _ in 0..5 {
        println!("{}", gen.next_u32());
    }
}
