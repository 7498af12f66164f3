xflags::xflags! {
    /// Development tasks for the workspace.
    cmd xtask {
        /// Format, apply compiler and clippy fixes.
        cmd fix {}
        /// Run every test in the workspace, doctests included.
        cmd test {}
        /// Run the criterion benchmarks.
        cmd bench {
            /// Only run benchmarks whose name contains this string.
            optional --filter filter: String
        }
    }
}
