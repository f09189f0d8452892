use reversible_mt19937::ReversibleMt19937;

fn main() {
    let mut gen = ReversibleMt19937::new(42);

    let forward: Vec<u32> = (0..5).map(|_| gen.next_u32()).collect();
    println!("forward:  {forward:?}");

    gen.reverse();
    let replayed: Vec<u32> = (0..5).map(|_| gen.next_u32()).collect();
    println!("reversed: {replayed:?}");

    gen.reverse();
    let resumed: Vec<u32> = (0..5).map(|_| gen.next_u32()).collect();
    println!("resumed:  {resumed:?}");
}
