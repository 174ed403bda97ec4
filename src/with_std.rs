
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        borrow,
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
        string,
        vec,
    };


    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
