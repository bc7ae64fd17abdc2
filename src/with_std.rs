
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        str,
        string,
        vec,
    };

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
