// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! contains_any {
    // Case-insensitive "haystack contains one of these needles".
    // Needles are expected lowercase already.
    ($hay:expr, $needles:expr) => {{
        let hay = $hay.to_lowercase();
        $needles.iter().any(|n| hay.contains(n))
    }};
}
