pub mod net;
pub mod route;
pub mod sim;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
