/*!
# Representations

Storage backends for flow computations. Currently there is a single representation,
[`FlowNetwork`], which stores every inserted edge as a forward/reverse arc pair together with
per-vertex adjacency lists of arc indices.
*/

use crate::{error::Terminal, ops::*, *};

mod flow_network;

pub use flow_network::*;
