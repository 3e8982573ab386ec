pub mod linkbudget;
pub mod mathphysics;
