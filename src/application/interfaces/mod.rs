/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

/// Module containing the navigation service interface
pub mod navigation;
/// Module containing the plant data service interface
pub mod plant;
