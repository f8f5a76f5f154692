mod controller;
mod graph;
