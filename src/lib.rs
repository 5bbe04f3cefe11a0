/*!
clearance3d
===========

**clearance3d** computes closed-form minimum distances (and, optionally,
separating directions) between pairs of simple 3-dimensional collision
primitives: spheres, capsules, and boxes with an arbitrary rigid pose.

The distances are meant to be used as clearance constraints inside an
optimization-based motion planner: every query is a pure, branch-free,
closed-form expression built from `+ − × ÷ sqrt max min`, generic over any
scalar implementing [`simba::simd::SimdRealField`]. Plugging in a dual-number
or symbolic scalar therefore yields expressions an automatic-differentiation
backend can evaluate and differentiate; plugging in `f64` yields plain numeric
evaluation.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod math;
pub mod query;
pub mod shape;
