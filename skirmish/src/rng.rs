pub use skirmish_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
    rand_util,
};
