#[cfg(test)]
mod common;

#[cfg(test)]
mod repo_list_tests;

#[cfg(test)]
mod repo_isolation_tests;

#[cfg(test)]
mod repo_not_found_tests;

#[cfg(test)]
mod fixture_invariant_tests;

#[cfg(test)]
mod config_tests;
